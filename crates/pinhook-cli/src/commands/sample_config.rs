use pinhook_registry::HookRegistry;

use crate::cli::GlobalFlags;

/// Handle `pinhook sample-config`.
///
/// Always emits YAML regardless of the format flag: the descriptor itself
/// is the product, meant to be redirected into a project.
pub fn run(_flags: &GlobalFlags) -> anyhow::Result<()> {
    let sample = HookRegistry::sample();
    print!("{}", sample.to_yaml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pinhook_registry::HookRegistry;

    #[test]
    fn sample_yaml_is_newline_terminated() {
        let yaml = HookRegistry::sample()
            .to_yaml()
            .expect("sample should serialize");
        assert!(yaml.ends_with('\n'));
        assert!(!yaml.ends_with("\n\n"));
    }

    #[test]
    fn sample_passes_its_own_strict_validation() {
        assert!(HookRegistry::sample().validate().is_ok());
    }
}
