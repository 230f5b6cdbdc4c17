use jump::app::command::Command;
use jump::app::navigator::Navigator;

fn main() -> anyhow::Result<()> {
    jump::init();

    let command = Command::from_args(std::env::args().skip(1));
    Navigator::bootstrap()?.run(command)
}
