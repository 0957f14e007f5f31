fn main() {
    soft_ui::init_tracing("error,example=info,soft_ui_components=debug");

    let style_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    if let Err(err) = example::run(style_path.as_deref()) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
