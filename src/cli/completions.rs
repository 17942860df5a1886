use crate::cert::KNOWN_STATUSES;
use crate::cli::args::{Cli, CompletionCommands, CompletionHelperCommands};
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

const KNOWN_TYPES: &[&str] = &["AMAZON_ISSUED", "IMPORTED", "PRIVATE"];
const KNOWN_COLUMNS: &[&str] = &["domain", "status", "arn"];

pub fn handle_completion_command(command: &CompletionCommands) -> Result<()> {
    let shell = command.shell();
    let mut cmd = Cli::command();
    let app_name = "acm-lookup";

    // For bash, add our custom completion enhancement first
    if matches!(shell, Shell::Bash) {
        println!("# Enhanced completion for acm-lookup statuses, types and columns");
        print!(
            r#"
_acm_lookup_complete_list() {{
    local values prefix current_word
    values=$(acm-lookup completion-helper "$1" 2>/dev/null)
    current_word="${{cur}}"
    prefix=""

    # Complete the element after the last comma
    if [[ "$current_word" == *,* ]]; then
        prefix="${{current_word%,*}},"
        current_word="${{current_word##*,}}"
    fi

    local word_list=""
    for value in $values; do
        if [[ "$value" == "$current_word"* ]]; then
            word_list="$word_list ${{prefix}}${{value}}"
        fi
    done

    COMPREPLY=($(compgen -W "$word_list" -- "${{cur}}"))
}}

_acm_lookup_override() {{
    local cur prev words cword
    _init_completion || return

    case "$prev" in
        "--statuses")
            _acm_lookup_complete_list statuses
            return 0
            ;;
        "--types")
            _acm_lookup_complete_list types
            return 0
            ;;
        "--columns")
            _acm_lookup_complete_list columns
            return 0
            ;;
    esac

    # Fall back to the original completion
    _acm-lookup "$@"
}}

"#
        );

        // Generate the base completion
        generate(shell, &mut cmd, app_name, &mut io::stdout());

        println!();
        println!("# Override the completion function");
        println!("complete -F _acm_lookup_override acm-lookup");
    } else {
        // For non-bash shells, just generate the standard completion
        generate(shell, &mut cmd, app_name, &mut io::stdout());
    }

    Ok(())
}

pub fn handle_completion_helper_command(
    command: &CompletionHelperCommands,
    output: &OutputFormat,
) -> Result<()> {
    output.print_list(completion_values(command));
    Ok(())
}

fn completion_values(command: &CompletionHelperCommands) -> &'static [&'static str] {
    match command {
        CompletionHelperCommands::Statuses => KNOWN_STATUSES,
        CompletionHelperCommands::Types => KNOWN_TYPES,
        CompletionHelperCommands::Columns => KNOWN_COLUMNS,
    }
}
