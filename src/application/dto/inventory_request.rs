/// InventoryRequest - What the caller asked the inventory script for
///
/// Built from the `--list` / `--host` flags with the same precedence as the
/// classic inventory scripts: `--list` wins, then a non-empty `--host`,
/// otherwise the empty default response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryRequest {
    List,
    Host(String),
    Default,
}

impl InventoryRequest {
    pub fn from_flags(list: bool, host: Option<&str>) -> Self {
        if list {
            return InventoryRequest::List;
        }
        match host {
            Some(name) if !name.is_empty() => InventoryRequest::Host(name.to_string()),
            _ => InventoryRequest::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flag() {
        assert_eq!(InventoryRequest::from_flags(true, None), InventoryRequest::List);
    }

    #[test]
    fn test_list_wins_over_host() {
        assert_eq!(
            InventoryRequest::from_flags(true, Some("10.0.0.1")),
            InventoryRequest::List
        );
    }

    #[test]
    fn test_host_flag() {
        assert_eq!(
            InventoryRequest::from_flags(false, Some("10.0.0.1")),
            InventoryRequest::Host("10.0.0.1".to_string())
        );
    }

    #[test]
    fn test_empty_host_is_default() {
        assert_eq!(
            InventoryRequest::from_flags(false, Some("")),
            InventoryRequest::Default
        );
    }

    #[test]
    fn test_no_flags() {
        assert_eq!(InventoryRequest::from_flags(false, None), InventoryRequest::Default);
    }
}
