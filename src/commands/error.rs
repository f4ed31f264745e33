/// Centralized error mapping for commands.
///
/// Keeps the full context chain so the surface can show why a command failed.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn keeps_context_chain() {
        let err = Err::<(), _>(anyhow::anyhow!("connection refused"))
            .context("submission failed")
            .unwrap_err();

        assert_eq!(map_err(err), "submission failed: connection refused");
    }
}
