fn main() {
    folio_web::run();
}
