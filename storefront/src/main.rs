fn main() {
    toskya_storefront::mount();
}
