use crate::commands::{CmdMessage, CmdResult, EMPTY_NAME_WARNING};
use crate::config::SkcmdConfig;
use crate::export::can_export;
use crate::model::CommandSpec;
use crate::template::assemble;

pub fn run(spec: &CommandSpec, config: &SkcmdConfig) -> CmdResult {
    let lines = assemble(spec, &config.template_options());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} argument(s), {} usage line",
        spec.arguments.len(),
        if spec.auto_usage { "generated" } else { "manual" }
    )));
    if !can_export(spec, &lines) {
        result.add_message(CmdMessage::warning(EMPTY_NAME_WARNING));
    }
    result.with_lines(lines)
}
