use dashkit_mocks::App;

fn main() {
    dioxus::launch(App);
}
