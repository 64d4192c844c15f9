fn main() {
    if let Err(err) = wp_status::cli::run() {
        wp_status::ui::println_error(&err);
        std::process::exit(wp_status::exit::exit_code(&err));
    }
}
