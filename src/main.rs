use checkers_engine::engine::Engine;

fn main() {
    Engine::new().run();
}
