use free_fly_camera::engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
