//! Builds the invocation text handed to the injection collaborator.

use crate::catalog::Script;

/// Produces the text placed at the user's prompt: the script's file
/// reference, with a single trailing space exactly when the script documents
/// at least one real parameter, leaving the cursor ready for arguments.
#[must_use]
pub fn build_invocation(script: &Script) -> String {
    if script.parameters.takes_arguments() {
        format!("{} ", script.file)
    } else {
        script.file.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Parameters;
    use std::path::PathBuf;

    fn script_with(parameters: Parameters) -> Script {
        Script {
            category: 0,
            name: "Cleanup".to_string(),
            file: "cleanup.sh".to_string(),
            parameters,
            description: "Removes stale temporary files.".to_string(),
            source_dir: PathBuf::from("/scripts"),
        }
    }

    #[test]
    fn test_no_parameters_yields_bare_file_reference() {
        let script = script_with(Parameters::None);
        assert_eq!(build_invocation(&script), "cleanup.sh");
    }

    #[test]
    fn test_documented_parameters_yield_trailing_space() {
        let script = script_with(Parameters::Documented(vec!["target dir".to_string()]));
        assert_eq!(build_invocation(&script), "cleanup.sh ");
    }
}
