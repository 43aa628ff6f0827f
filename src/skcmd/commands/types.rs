use crate::commands::CmdResult;
use crate::model::ArgType;

pub fn run() -> CmdResult {
    CmdResult::default().with_arg_types(ArgType::all().to_vec())
}
