fn main() {
    uniffi::generate_scaffolding("src/sunsafe.udl").unwrap();
}
