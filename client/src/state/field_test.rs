use super::*;
use canvas::formation::Preset;

fn synced() -> (EngineCore, FieldState) {
    let mut core = EngineCore::default();
    core.set_canvas_size(Size::new(1200.0, 600.0));
    let mut field = FieldState::new(&core.config);
    field.sync(&core);
    (core, field)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_has_no_tokens_and_default_palette() {
    let field = FieldState::new(&EditorConfig::default());
    assert!(field.tokens.is_empty());
    assert_eq!(field.palette.len(), 4);
    assert_eq!(field.formation, Formation::Preset(Preset::GunEmptyBunch));
    assert_eq!(field.tool, Tool::Draw);
    assert!(field.error.is_none());
}

#[test]
fn token_style_hidden_before_sync() {
    let field = FieldState::new(&EditorConfig::default());
    assert_eq!(field.token_style(TokenId::Qb), "display: none;");
}

// =============================================================
// Sync
// =============================================================

#[test]
fn sync_copies_all_six_tokens_in_roster_order() {
    let (_, field) = synced();
    let ids: Vec<TokenId> = field.tokens.iter().map(|t| t.id).collect();
    assert_eq!(ids, TokenId::ALL.to_vec());
    assert_eq!(field.canvas_size, Size::new(1200.0, 600.0));
}

#[test]
fn sync_tracks_positions_and_colors() {
    let (mut core, mut field) = synced();
    core.on_token_click(TokenId::Wr2);
    core.choose_color("#4444ff");
    field.sync(&core);

    let wr2 = field.token(TokenId::Wr2).cloned();
    assert_eq!(wr2.as_ref().and_then(|t| t.color.clone()).as_deref(), Some("#4444ff"));
    assert_eq!(wr2.map(|t| t.left), Some(core.token(TokenId::Wr2).left));
}

#[test]
fn sync_tracks_formation_tool_and_picker() {
    let (mut core, mut field) = synced();
    core.mirror();
    core.set_tool(Tool::Erase);
    core.on_token_click(TokenId::Qb);
    field.sync(&core);

    assert_eq!(field.formation, Formation::Custom);
    assert_eq!(field.tool, Tool::Erase);
    assert_eq!(field.picker.map(|p| p.token), Some(TokenId::Qb));
}

// =============================================================
// Styles
// =============================================================

#[test]
fn token_style_places_token_with_color() {
    let view = TokenView {
        id: TokenId::Wr1,
        left: 840.0,
        top: 414.0,
        color: Some("#ff4444".to_owned()),
    };
    assert_eq!(
        view.style(60.0),
        "left: 840.00px; top: 414.00px; width: 60.00px; height: 60.00px; background-color: #ff4444;"
    );
    assert_eq!(view.class(), "token token--wr");
}

#[test]
fn token_style_without_color_keeps_css_default() {
    let view = TokenView { id: TokenId::Center, left: 570.0, top: 384.0, color: None };
    assert_eq!(view.style(60.0), "left: 570.00px; top: 384.00px; width: 60.00px; height: 60.00px;");
    assert_eq!(view.class(), "token token--center");
}

#[test]
fn picker_style_follows_anchor() {
    let (mut core, mut field) = synced();
    assert!(field.picker_style().is_none());
    core.on_token_click(TokenId::Center);
    field.sync(&core);
    // Center token: left 570, top 384, size 60, gap 10.
    assert_eq!(field.picker_style().as_deref(), Some("left: 600.00px; top: 454.00px;"));
}

#[test]
fn eraser_ring_centered_on_pointer() {
    let (mut core, mut field) = synced();
    core.set_tool(Tool::Erase);
    core.on_canvas_pointer_move(Point::new(100.0, 50.0));
    field.sync(&core);
    assert_eq!(
        field.eraser_style().as_deref(),
        Some("left: 80.00px; top: 30.00px; width: 40.00px; height: 40.00px;")
    );
}

#[test]
fn eraser_ring_hidden_with_draw_tool() {
    let mut field = FieldState::new(&EditorConfig::default());
    field.eraser_cursor = Some(Point::new(10.0, 10.0));
    assert!(field.eraser_style().is_none());
}

#[test]
fn field_style_matches_canvas() {
    let (_, field) = synced();
    assert_eq!(field.field_style(), "width: 1200.00px; height: 600.00px;");
}
