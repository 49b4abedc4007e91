use clap::Parser;

use latynka_cli::commands::pack_ops;
use latynka_cli::logging::init_logging;
use latynka_cli::remote::Channel;

#[derive(Parser)]
#[command(
    name = "latynka",
    about = "Build the Ukrainian Latin (uk_la) resource pack from the latest uk_ua language file"
)]
struct Cli {
    /// `snapshot` to follow the latest snapshot; anything else follows the latest release.
    /// Arguments after the first are ignored.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<String>,
}

impl Cli {
    fn channel(&self) -> Channel {
        Channel::from_arg(self.args.first().map(String::as_str))
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();
    pack_ops::build(cli.channel());
}
