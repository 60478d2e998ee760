use ira_views::ResourceState;

/// Data of a settled hook, or its error as a command failure.
pub fn settled<D>(state: ResourceState<D>, what: &str) -> anyhow::Result<D> {
    if let Some(error) = state.error {
        anyhow::bail!(error);
    }
    state
        .data
        .ok_or_else(|| anyhow::anyhow!("no {what} returned"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_stale_data() {
        let state = ResourceState {
            data: Some(1),
            loading: false,
            error: Some("Failed to fetch projects".to_string()),
        };
        let err = settled(state, "projects").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch projects");
    }

    #[test]
    fn data_is_returned() {
        let state = ResourceState {
            data: Some(vec![1, 2]),
            loading: false,
            error: None,
        };
        assert_eq!(settled(state, "numbers").unwrap(), vec![1, 2]);
    }

    #[test]
    fn empty_state_is_reported() {
        let state = ResourceState::<u8> {
            data: None,
            loading: false,
            error: None,
        };
        assert!(settled(state, "project").unwrap_err().to_string().contains("no project"));
    }
}
