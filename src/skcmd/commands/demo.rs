use crate::commands::CmdResult;
use crate::config::SkcmdConfig;
use crate::model::CommandSpec;
use crate::template::assemble;

pub fn run(config: &SkcmdConfig) -> CmdResult {
    let spec = CommandSpec::demo();
    let lines = assemble(&spec, &config.template_options());
    CmdResult::default().with_lines(lines).with_spec(spec)
}
