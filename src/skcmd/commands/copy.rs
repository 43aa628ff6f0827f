use crate::clipboard::{format_for_clipboard, Clipboard};
use crate::commands::{CmdMessage, CmdResult, EMPTY_NAME_WARNING};
use crate::config::SkcmdConfig;
use crate::error::Result;
use crate::export::can_export;
use crate::model::CommandSpec;
use crate::template::assemble;

pub fn run<C: Clipboard>(
    clipboard: &mut C,
    spec: &CommandSpec,
    config: &SkcmdConfig,
) -> Result<CmdResult> {
    let lines = assemble(spec, &config.template_options());

    if !can_export(spec, &lines) {
        let mut res = CmdResult::default().with_lines(lines);
        res.add_message(CmdMessage::warning(EMPTY_NAME_WARNING));
        return Ok(res);
    }

    let text = format_for_clipboard(&lines, config.clipboard_newline);
    clipboard.copy(&text)?;

    let mut result = CmdResult::default().with_lines(lines);
    result.exported = true;
    result.add_message(CmdMessage::success("Command block copied to clipboard."));
    Ok(result)
}
