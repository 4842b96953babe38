fn main() {
    multiversx_sc_meta_lib::cli_main::<entry_registry::AbiProvider>();
}
