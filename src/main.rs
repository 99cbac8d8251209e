use s3_upload_publish::utils::log_utils::init_tracing;
use s3_upload_publish::{args, run_app};

fn main() {
    // Parse command-line arguments (exits on invalid input)
    let args = args::args_checks();
    init_tracing(args.verbose);

    if let Err(e) = run_app(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
