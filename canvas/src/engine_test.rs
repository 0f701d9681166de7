#![allow(clippy::float_cmp)]

use super::*;
use crate::formation::{Preset, mirror_left};

// =============================================================
// Helpers
// =============================================================

const EPSILON: f64 = 1e-9;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A session on a 1200x600 canvas with the default formation.
fn core() -> EngineCore {
    let mut core = EngineCore::default();
    core.set_canvas_size(Size::new(1200.0, 600.0));
    core
}

fn has(actions: &[Action], wanted: &Action) -> bool {
    actions.iter().any(|a| a == wanted)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has(actions, &Action::RenderNeeded)
}

fn has_picker_opened(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::PickerOpened(_)))
}

/// Press at the token's top-left corner plus (5, 5), drag by (dx, dy), release.
fn drag_token(core: &mut EngineCore, id: TokenId, dx: f64, dy: f64) -> Vec<Action> {
    let token = core.token(id).clone();
    let press = pt(token.left + 5.0, token.top + 5.0);
    let mut actions = core.on_token_pointer_down(id, press);
    actions.extend(core.on_token_drag_move(pt(press.x + dx / 2.0, press.y + dy / 2.0)));
    actions.extend(core.on_token_drag_move(pt(press.x + dx, press.y + dy)));
    actions.extend(core.on_token_drag_end());
    actions
}

fn draw_stroke(core: &mut EngineCore, points: &[(f64, f64)]) {
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        core.on_canvas_pointer_down(pt(x, y));
    }
    for &(x, y) in iter {
        core.on_canvas_pointer_move(pt(x, y));
    }
    core.on_canvas_pointer_up();
}

// =============================================================
// Construction and sizing
// =============================================================

#[test]
fn new_session_applies_default_preset() {
    let core = EngineCore::default();
    assert_eq!(core.formation(), Formation::Preset(Preset::GunEmptyBunch));
    for (id, left, top) in Preset::GunEmptyBunch.positions(core.size, 60.0) {
        assert_eq!(core.token(id).left, left);
        assert_eq!(core.token(id).top, top);
    }
}

#[test]
fn new_session_has_six_tokens_and_no_routes() {
    let core = EngineCore::default();
    assert_eq!(core.roster.iter().count(), 6);
    assert!(core.paths.is_empty());
    assert_eq!(core.tool(), Tool::Draw);
}

#[test]
fn resize_with_preset_reapplies_preset_table() {
    let mut core = core();
    for (id, left, top) in Preset::GunEmptyBunch.positions(Size::new(1200.0, 600.0), 60.0) {
        assert_eq!(core.token(id).left, left);
        assert_eq!(core.token(id).top, top);
    }
    let actions = core.set_canvas_size(Size::new(800.0, 450.0));
    assert!(has(&actions, &Action::TokensChanged));
    assert!(has_render_needed(&actions));
    assert_eq!(core.token(TokenId::Center).left, 370.0);
}

#[test]
fn resize_with_custom_scales_positions_and_routes() {
    let mut core = core();
    core.select_formation(Formation::Custom);
    core.roster.set_position(TokenId::Wr1, 300.0, 450.0);
    draw_stroke(&mut core, &[(100.0, 100.0), (200.0, 200.0)]);

    core.set_canvas_size(Size::new(600.0, 300.0));

    assert_eq!(core.token(TokenId::Wr1).left, 135.0);
    assert_eq!(core.token(TokenId::Wr1).top, 210.0);
    assert_eq!(core.paths.paths()[0].points, vec![pt(50.0, 50.0), pt(100.0, 100.0)]);
    assert_eq!(core.formation(), Formation::Custom);
}

#[test]
fn resize_after_mirror_keeps_centerline_and_symmetry() {
    let mut core = EngineCore::new(EditorConfig::default());
    let before: Vec<(TokenId, f64)> = core.roster.iter().map(|t| (t.id, t.left)).collect();
    core.mirror();
    assert_eq!(core.formation(), Formation::Custom);

    core.set_canvas_size(Size::new(960.0, 540.0));

    let centered = 480.0 - 30.0;
    assert_eq!(core.token(TokenId::Center).left, centered);
    assert_eq!(core.token(TokenId::Qb).left, centered);
    for (id, left) in before {
        if id.is_receiver() {
            let mirrored = mirror_left(left, 1920.0, 60.0);
            assert!(approx_eq(core.token(id).left, (mirrored + 30.0) * 0.5 - 30.0));
        }
    }
}

#[test]
fn resize_to_same_size_is_noop() {
    let mut core = core();
    assert!(core.set_canvas_size(Size::new(1200.0, 600.0)).is_empty());
}

#[test]
fn resize_ends_token_drag_and_detaches_listeners() {
    let mut core = core();
    let wr1 = core.token(TokenId::Wr1).clone();
    core.on_token_pointer_down(TokenId::Wr1, pt(wr1.left, wr1.top));
    let actions = core.set_canvas_size(Size::new(800.0, 450.0));
    assert!(has(&actions, &Action::DetachDragListeners));
    assert!(!core.is_dragging_token());
}

#[test]
fn resize_commits_live_stroke() {
    let mut core = core();
    core.on_canvas_pointer_down(pt(10.0, 10.0));
    core.on_canvas_pointer_move(pt(20.0, 20.0));
    core.set_canvas_size(Size::new(600.0, 300.0));
    assert!(!core.paths.is_live());
    assert_eq!(core.paths.len(), 1);
}

// =============================================================
// Token drag
// =============================================================

#[test]
fn token_press_attaches_listeners() {
    let mut core = core();
    let actions = core.on_token_pointer_down(TokenId::Wr1, pt(700.0, 400.0));
    assert!(has(&actions, &Action::AttachDragListeners));
    assert!(core.is_dragging_token());
}

#[test]
fn drag_snaps_to_grid() {
    let mut core = core();
    core.select_formation(Formation::Custom);
    core.roster.set_position(TokenId::Wr1, 600.0, 420.0);
    // Press 7 px into the token, move so the raw origin would be (647, 468).
    core.on_token_pointer_down(TokenId::Wr1, pt(607.0, 427.0));
    core.on_token_drag_move(pt(654.0, 475.0));
    assert_eq!(core.token(TokenId::Wr1).left, 660.0);
    assert_eq!(core.token(TokenId::Wr1).top, 480.0);
}

#[test]
fn drag_halfway_rounds_up() {
    let mut core = core();
    core.select_formation(Formation::Custom);
    core.roster.set_position(TokenId::Wr2, 600.0, 420.0);
    core.on_token_pointer_down(TokenId::Wr2, pt(600.0, 420.0));
    core.on_token_drag_move(pt(615.0, 435.0));
    assert_eq!(core.token(TokenId::Wr2).left, 630.0);
    assert_eq!(core.token(TokenId::Wr2).top, 450.0);
}

#[test]
fn movement_within_threshold_does_not_move_token() {
    let mut core = core();
    let before = core.token(TokenId::Wr1).clone();
    core.on_token_pointer_down(TokenId::Wr1, pt(before.left + 10.0, before.top + 10.0));
    let actions = core.on_token_drag_move(pt(before.left + 15.0, before.top + 6.0));
    assert!(actions.is_empty());
    assert_eq!(core.token(TokenId::Wr1), &before);
}

#[test]
fn qb_stays_horizontally_centered() {
    let mut core = core();
    drag_token(&mut core, TokenId::Qb, 300.0, 60.0);
    assert_eq!(core.token(TokenId::Qb).left, 600.0 - 30.0);
}

#[test]
fn token_cannot_move_above_center() {
    let mut core = core();
    let center_top = core.token(TokenId::Center).top;
    drag_token(&mut core, TokenId::Wr1, 0.0, -300.0);
    assert_eq!(core.token(TokenId::Wr1).top, center_top);
}

#[test]
fn center_token_is_not_draggable() {
    let mut core = core();
    let before = core.token(TokenId::Center).clone();
    let actions = drag_token(&mut core, TokenId::Center, 120.0, 120.0);
    assert!(!has(&actions, &Action::AttachDragListeners));
    assert_eq!(core.token(TokenId::Center), &before);
    assert_eq!(core.formation(), Formation::Preset(Preset::GunEmptyBunch));
}

#[test]
fn drag_release_switches_to_custom_and_schedules_settle() {
    let mut core = core();
    let actions = drag_token(&mut core, TokenId::Wr3, 90.0, 90.0);
    assert!(has(&actions, &Action::DetachDragListeners));
    assert!(has(&actions, &Action::FormationChanged(Formation::Custom)));
    assert!(has(&actions, &Action::ScheduleDragSettle { delay_ms: 100 }));
    assert_eq!(core.formation(), Formation::Custom);
    assert!(core.ui.suppress_click);
}

#[test]
fn drag_in_custom_does_not_repeat_formation_change() {
    let mut core = core();
    core.select_formation(Formation::Custom);
    let actions = drag_token(&mut core, TokenId::Wr3, 90.0, 90.0);
    assert!(!actions.iter().any(|a| matches!(a, Action::FormationChanged(_))));
}

#[test]
fn pure_click_does_not_alter_formation() {
    let mut core = core();
    let wr1 = core.token(TokenId::Wr1).clone();
    core.on_token_pointer_down(TokenId::Wr1, pt(wr1.left + 2.0, wr1.top + 2.0));
    core.on_token_drag_move(pt(wr1.left + 4.0, wr1.top + 5.0));
    let actions = core.on_token_drag_end();
    assert_eq!(actions, vec![Action::DetachDragListeners]);
    assert_eq!(core.formation(), Formation::Preset(Preset::GunEmptyBunch));
    assert_eq!(core.token(TokenId::Wr1), &wr1);
}

#[test]
fn drag_cancel_detaches_listeners() {
    let mut core = core();
    core.on_token_pointer_down(TokenId::Wr2, pt(900.0, 384.0));
    let actions = core.on_token_drag_cancel();
    assert!(has(&actions, &Action::DetachDragListeners));
    assert!(!core.is_dragging_token());
}

#[test]
fn drag_move_without_press_is_ignored() {
    let mut core = core();
    assert!(core.on_token_drag_move(pt(10.0, 10.0)).is_empty());
    assert!(core.on_token_drag_end().is_empty());
}

#[test]
fn threshold_resets_on_each_press() {
    let mut core = core();
    drag_token(&mut core, TokenId::Wr1, 90.0, 90.0);
    core.settle_drag();
    core.select_formation(Formation::Preset(Preset::GunEmptyAce));

    let wr1 = core.token(TokenId::Wr1).clone();
    core.on_token_pointer_down(TokenId::Wr1, pt(wr1.left, wr1.top));
    core.on_token_drag_move(pt(wr1.left + 3.0, wr1.top + 3.0));
    core.on_token_drag_end();

    assert_eq!(core.formation(), Formation::Preset(Preset::GunEmptyAce));
}

// =============================================================
// Click vs drag and the color palette
// =============================================================

#[test]
fn click_opens_palette_below_token() {
    let mut core = core();
    let wr2 = core.token(TokenId::Wr2).clone();
    core.on_token_pointer_down(TokenId::Wr2, pt(wr2.left + 1.0, wr2.top + 1.0));
    core.on_token_drag_end();
    let actions = core.on_token_click(TokenId::Wr2);

    let expected = PickerState { token: TokenId::Wr2, anchor: pt(wr2.left + 30.0, wr2.top + 70.0) };
    assert_eq!(actions, vec![Action::PickerOpened(expected)]);
    assert_eq!(core.picker(), Some(expected));
}

#[test]
fn click_after_drag_is_suppressed_until_settle() {
    let mut core = core();
    drag_token(&mut core, TokenId::Wr1, 120.0, 60.0);
    assert!(core.on_token_click(TokenId::Wr1).is_empty());
    assert!(core.picker().is_none());

    core.settle_drag();
    assert!(has_picker_opened(&core.on_token_click(TokenId::Wr1)));
}

#[test]
fn new_press_cancels_pending_settle() {
    let mut core = core();
    drag_token(&mut core, TokenId::Wr1, 120.0, 60.0);
    let wr2 = core.token(TokenId::Wr2).clone();
    let actions = core.on_token_pointer_down(TokenId::Wr2, pt(wr2.left, wr2.top));
    assert!(has(&actions, &Action::CancelDragSettle));
    assert!(!core.ui.suppress_click);
}

#[test]
fn center_click_opens_palette() {
    let mut core = core();
    core.on_token_pointer_down(TokenId::Center, pt(600.0, 400.0));
    assert!(has_picker_opened(&core.on_token_click(TokenId::Center)));
}

#[test]
fn choose_color_writes_color_and_closes() {
    let mut core = core();
    core.on_token_click(TokenId::Qb);
    let actions = core.choose_color("#ffff44");
    assert_eq!(actions, vec![Action::TokensChanged, Action::PickerClosed]);
    assert_eq!(core.token(TokenId::Qb).color.as_deref(), Some("#ffff44"));
    assert!(core.picker().is_none());
}

#[test]
fn choose_color_outside_palette_is_ignored() {
    let mut core = core();
    core.on_token_click(TokenId::Qb);
    assert!(core.choose_color("#123456").is_empty());
    assert!(core.token(TokenId::Qb).color.is_none());
    assert!(core.picker().is_some());
}

#[test]
fn choose_color_without_palette_is_noop() {
    let mut core = core();
    assert!(core.choose_color("#ff4444").is_empty());
}

#[test]
fn outside_click_closes_palette() {
    let mut core = core();
    core.on_token_click(TokenId::Wr4);
    let actions = core.on_outside_click(Some(pt(5.0, 5.0)), false);
    assert_eq!(actions, vec![Action::PickerClosed]);
    assert!(core.picker().is_none());
}

#[test]
fn outside_click_off_canvas_closes_palette() {
    let mut core = core();
    core.on_token_click(TokenId::Wr4);
    assert_eq!(core.on_outside_click(None, false), vec![Action::PickerClosed]);
}

#[test]
fn click_inside_palette_keeps_it_open() {
    let mut core = core();
    core.on_token_click(TokenId::Wr4);
    assert!(core.on_outside_click(Some(pt(5.0, 5.0)), true).is_empty());
    assert!(core.picker().is_some());
}

#[test]
fn click_on_a_token_keeps_palette_open() {
    let mut core = core();
    core.on_token_click(TokenId::Wr4);
    let wr1 = core.token(TokenId::Wr1).clone();
    assert!(core.on_outside_click(Some(pt(wr1.left + 30.0, wr1.top + 30.0)), false).is_empty());
    assert!(core.picker().is_some());
}

#[test]
fn palette_follows_mirrored_token() {
    let mut core = core();
    core.on_token_click(TokenId::Wr1);
    let actions = core.mirror();
    let wr1 = core.token(TokenId::Wr1).clone();
    assert!(has(
        &actions,
        &Action::PickerOpened(PickerState { token: TokenId::Wr1, anchor: pt(wr1.left + 30.0, wr1.top + 70.0) })
    ));
}

// =============================================================
// Formations and mirroring
// =============================================================

#[test]
fn ace_then_bunch_matches_bunch_and_clears_routes() {
    let mut core = core();
    core.select_formation(Formation::Preset(Preset::GunEmptyAce));
    draw_stroke(&mut core, &[(10.0, 10.0), (50.0, 50.0), (90.0, 10.0)]);
    assert_eq!(core.paths.len(), 1);

    let actions = core.select_formation(Formation::Preset(Preset::GunEmptyBunch));

    assert!(has(&actions, &Action::FormationChanged(Formation::Preset(Preset::GunEmptyBunch))));
    assert!(has_render_needed(&actions));
    assert!(core.paths.is_empty());
    for (id, left, top) in Preset::GunEmptyBunch.positions(core.size, 60.0) {
        assert_eq!(core.token(id).left, left);
        assert_eq!(core.token(id).top, top);
    }
}

#[test]
fn selecting_custom_keeps_routes_and_positions() {
    let mut core = core();
    draw_stroke(&mut core, &[(10.0, 10.0), (50.0, 50.0)]);
    let before = core.roster.clone();
    let actions = core.select_formation(Formation::Custom);
    assert_eq!(actions, vec![Action::FormationChanged(Formation::Custom)]);
    assert_eq!(core.paths.len(), 1);
    for id in TokenId::ALL {
        assert_eq!(core.token(id), before.get(id));
    }
}

#[test]
fn mirror_switches_to_custom() {
    let mut core = core();
    let actions = core.mirror();
    assert!(has(&actions, &Action::TokensChanged));
    assert!(has(&actions, &Action::FormationChanged(Formation::Custom)));
    assert_eq!(core.formation(), Formation::Custom);
}

#[test]
fn mirror_twice_restores_receivers() {
    let mut core = core();
    let before = core.roster.clone();
    core.mirror();
    core.mirror();
    for id in TokenId::RECEIVERS {
        assert!(approx_eq(core.token(id).left, before.get(id).left));
        assert_eq!(core.token(id).top, before.get(id).top);
    }
}

#[test]
fn mirror_keeps_routes() {
    let mut core = core();
    draw_stroke(&mut core, &[(10.0, 10.0), (50.0, 50.0)]);
    core.mirror();
    assert_eq!(core.paths.len(), 1);
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn draw_press_starts_stroke_in_history() {
    let mut core = core();
    let actions = core.on_canvas_pointer_down(pt(10.0, 20.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.paths.len(), 1);
    assert_eq!(core.paths.live_path().map(|p| p.points.clone()), Some(vec![pt(10.0, 20.0)]));
}

#[test]
fn draw_moves_append_points() {
    let mut core = core();
    core.on_canvas_pointer_down(pt(0.0, 0.0));
    assert!(has_render_needed(&core.on_canvas_pointer_move(pt(5.0, 5.0))));
    core.on_canvas_pointer_move(pt(10.0, 0.0));
    assert_eq!(core.paths.live_path().map(|p| p.points.len()), Some(3));
}

#[test]
fn hover_without_press_draws_nothing() {
    let mut core = core();
    assert!(core.on_canvas_pointer_move(pt(5.0, 5.0)).is_empty());
    assert!(core.paths.is_empty());
}

#[test]
fn release_smooths_only_the_new_stroke() {
    let mut core = core();
    draw_stroke(&mut core, &[(0.0, 0.0), (3.0, 9.0), (6.0, 0.0)]);
    draw_stroke(&mut core, &[(0.0, 0.0), (3.0, 6.0), (6.0, 0.0), (9.0, 6.0), (12.0, 0.0)]);

    let first = &core.paths.paths()[0].points;
    assert_eq!(first[1], pt(3.0, 3.0));

    let second = &core.paths.paths()[1].points;
    assert_eq!(second[0], pt(0.0, 0.0));
    assert_eq!(second[4], pt(12.0, 0.0));
    assert!(approx_eq(second[1].y, 2.0));
    assert!(approx_eq(second[2].y, 4.0));
    assert!(approx_eq(second[3].y, 2.0));
}

#[test]
fn release_does_not_straighten_by_default() {
    let mut core = core();
    draw_stroke(&mut core, &[(0.0, 0.0), (50.0, 2.0), (100.0, 1.0)]);
    assert!(core.paths.paths()[0].points[1].y > 0.0);
}

#[test]
fn release_straightens_when_enabled() {
    let config = EditorConfig { straighten_strokes: true, ..EditorConfig::default() };
    let mut core = EngineCore::new(config);
    draw_stroke(&mut core, &[(0.0, 0.0), (50.0, 2.0), (100.0, 1.0)]);
    assert!(core.paths.paths()[0].points.iter().all(|p| p.y.abs() < EPSILON));
}

#[test]
fn pointer_leave_commits_stroke() {
    let mut core = core();
    core.on_canvas_pointer_down(pt(0.0, 0.0));
    core.on_canvas_pointer_move(pt(3.0, 9.0));
    core.on_canvas_pointer_move(pt(6.0, 0.0));
    core.on_canvas_pointer_leave();
    assert!(!core.paths.is_live());
    assert_eq!(core.paths.paths()[0].points[1], pt(3.0, 3.0));
}

#[test]
fn pointer_cancel_commits_stroke() {
    let mut core = core();
    core.on_canvas_pointer_down(pt(0.0, 0.0));
    core.on_canvas_pointer_move(pt(6.0, 0.0));
    core.on_canvas_pointer_cancel();
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.paths.len(), 1);
}

#[test]
fn canvas_press_during_token_drag_is_ignored() {
    let mut core = core();
    core.on_token_pointer_down(TokenId::Wr1, pt(840.0, 414.0));
    assert!(core.on_canvas_pointer_down(pt(10.0, 10.0)).is_empty());
    assert!(core.paths.is_empty());
    assert!(core.on_canvas_pointer_up().is_empty());
    assert!(core.is_dragging_token());
}

// =============================================================
// Erasing
// =============================================================

#[test]
fn erase_press_removes_points_in_radius() {
    let mut core = core();
    draw_stroke(&mut core, &[(100.0, 100.0), (200.0, 100.0)]);
    core.set_tool(Tool::Erase);
    let actions = core.on_canvas_pointer_down(pt(110.0, 105.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.paths.paths()[0].points, vec![pt(200.0, 100.0)]);
}

#[test]
fn erase_on_every_move() {
    let mut core = core();
    draw_stroke(&mut core, &[(100.0, 100.0), (200.0, 100.0)]);
    draw_stroke(&mut core, &[(400.0, 400.0)]);
    core.set_tool(Tool::Erase);
    core.on_canvas_pointer_down(pt(0.0, 0.0));
    core.on_canvas_pointer_move(pt(100.0, 100.0));
    core.on_canvas_pointer_move(pt(200.0, 100.0));
    assert_eq!(core.paths.len(), 1);
    assert_eq!(core.paths.paths()[0].points, vec![pt(400.0, 400.0)]);
}

#[test]
fn eraser_hover_does_not_erase_but_moves_cursor() {
    let mut core = core();
    draw_stroke(&mut core, &[(100.0, 100.0)]);
    core.set_tool(Tool::Erase);
    let actions = core.on_canvas_pointer_move(pt(100.0, 100.0));
    assert_eq!(actions, vec![Action::CursorChanged(Some(pt(100.0, 100.0)))]);
    assert_eq!(core.paths.len(), 1);
}

#[test]
fn eraser_cursor_hides_on_leave_and_tool_switch() {
    let mut core = core();
    core.set_tool(Tool::Erase);
    core.on_canvas_pointer_move(pt(10.0, 10.0));
    assert_eq!(core.on_canvas_pointer_leave(), vec![Action::CursorChanged(None)]);

    core.on_canvas_pointer_move(pt(10.0, 10.0));
    assert_eq!(core.set_tool(Tool::Draw), vec![Action::CursorChanged(None)]);
    assert!(core.ui.eraser_cursor.is_none());
}

#[test]
fn erase_release_does_not_add_strokes() {
    let mut core = core();
    core.set_tool(Tool::Erase);
    core.on_canvas_pointer_down(pt(10.0, 10.0));
    core.on_canvas_pointer_up();
    assert!(core.paths.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

// =============================================================
// Undo and clear
// =============================================================

#[test]
fn undo_removes_only_last_stroke() {
    let mut core = core();
    draw_stroke(&mut core, &[(1.0, 1.0)]);
    draw_stroke(&mut core, &[(2.0, 2.0)]);
    let actions = core.undo();
    assert!(has_render_needed(&actions));
    assert_eq!(core.paths.len(), 1);
    assert_eq!(core.paths.paths()[0].points, vec![pt(1.0, 1.0)]);
}

#[test]
fn undo_on_empty_history_is_noop() {
    let mut core = core();
    assert!(core.undo().is_empty());
}

#[test]
fn clear_drops_all_strokes() {
    let mut core = core();
    draw_stroke(&mut core, &[(1.0, 1.0)]);
    draw_stroke(&mut core, &[(2.0, 2.0)]);
    assert!(has_render_needed(&core.clear()));
    assert!(core.paths.is_empty());
    assert!(core.clear().is_empty());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_during_drag_detaches_listeners() {
    let mut core = core();
    let wr1 = core.token(TokenId::Wr1).clone();
    core.on_token_pointer_down(TokenId::Wr1, pt(wr1.left, wr1.top));
    core.on_token_drag_move(pt(wr1.left + 60.0, wr1.top + 60.0));
    let actions = core.teardown();
    assert!(has(&actions, &Action::DetachDragListeners));
    // The drag moved the token, so its settle timer was scheduled and then cancelled.
    assert!(has(&actions, &Action::CancelDragSettle));
    assert!(!core.ui.suppress_click);
}

#[test]
fn teardown_cancels_pending_settle() {
    let mut core = core();
    drag_token(&mut core, TokenId::Wr2, 90.0, 90.0);
    assert_eq!(core.teardown(), vec![Action::CancelDragSettle]);
}

#[test]
fn teardown_when_idle_is_quiet() {
    let mut core = core();
    assert!(core.teardown().is_empty());
}
