fn main() {
    dioxus::launch(nextzone_site::App);
}
