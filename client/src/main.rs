use playbook::app::App;

fn main() {
    playbook::init_logging();
    leptos::mount::mount_to_body(App);
}
