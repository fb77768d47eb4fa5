//! Name to ID resolution over a fetched listing
//!
//! Resolution never fails: an unmatched name, an empty listing, or an absent
//! listing all yield an empty ID. Callers decide what an empty ID means
//! (create in save flows, an invalid-ID error everywhere else).

use log::debug;
use regex::RegexBuilder;

use crate::hcp::oauth_clients::OAuthClient;
use crate::hcp::policy_sets::PolicySet;
use crate::hcp::traits::{ApiObject, TfeResource};
use crate::hcp::variables::Variable;

/// How a criterion is compared against a resource's display field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-sensitive equality
    Exact,
    /// Case-insensitive pattern found anywhere in the field
    CaseInsensitivePattern,
}

/// Return the ID of the first resource in `listing` whose name satisfies `rule`
///
/// Listing order decides between duplicates.
pub fn resolve_id<T: TfeResource>(
    listing: Option<&[T]>,
    criterion: &str,
    rule: MatchRule,
) -> String {
    let Some(items) = listing else {
        return String::new();
    };

    let found = match rule {
        MatchRule::Exact => items.iter().find(|item| item.name() == criterion),
        MatchRule::CaseInsensitivePattern => {
            // An invalid pattern matches nothing.
            let Ok(pattern) = RegexBuilder::new(criterion).case_insensitive(true).build() else {
                debug!("Criterion '{}' is not a valid pattern, no match", criterion);
                return String::new();
            };
            items.iter().find(|item| pattern.is_match(item.name()))
        }
    };

    match found {
        Some(item) => {
            debug!("Resolved '{}' to {}", criterion, item.id());
            item.id().to_string()
        }
        None => {
            debug!("No resource matches '{}'", criterion);
            String::new()
        }
    }
}

/// Resolve a workspace variable ID by its key
pub fn variable_id(variables: Option<&[ApiObject<Variable>]>, key: &str) -> String {
    resolve_id(variables, key, MatchRule::Exact)
}

/// Resolve a policy set ID by its name
pub fn policy_set_id(policy_sets: Option<&[ApiObject<PolicySet>]>, name: &str) -> String {
    resolve_id(policy_sets, name, MatchRule::Exact)
}

/// Resolve an OAuth client ID by a service provider fragment (e.g. "github")
pub fn oauth_client_id(clients: Option<&[ApiObject<OAuthClient>]>, provider: &str) -> String {
    resolve_id(clients, provider, MatchRule::CaseInsensitivePattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: &'static str,
        name: &'static str,
    }

    impl TfeResource for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn items(pairs: &[(&'static str, &'static str)]) -> Vec<Item> {
        pairs.iter().map(|&(id, name)| Item { id, name }).collect()
    }

    fn variables(pairs: &[(&str, &str)]) -> Vec<ApiObject<Variable>> {
        pairs
            .iter()
            .map(|(id, key)| {
                ApiObject::from_raw(serde_json::json!({
                    "id": id,
                    "type": "vars",
                    "attributes": { "key": key, "category": "terraform" }
                }))
                .unwrap()
            })
            .collect()
    }

    fn oauth_clients(pairs: &[(&str, &str)]) -> Vec<ApiObject<OAuthClient>> {
        pairs
            .iter()
            .map(|(id, display)| {
                ApiObject::from_raw(serde_json::json!({
                    "id": id,
                    "type": "oauth-clients",
                    "attributes": { "service-provider-display-name": display }
                }))
                .unwrap()
            })
            .collect()
    }

    fn policy_sets(pairs: &[(&str, &str)]) -> Vec<ApiObject<PolicySet>> {
        pairs
            .iter()
            .map(|(id, name)| {
                ApiObject::from_raw(serde_json::json!({
                    "id": id,
                    "type": "policy-sets",
                    "attributes": { "name": name }
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_variable_found_by_key() {
        let vars = variables(&[("var-1", "FOO"), ("var-2", "BAR")]);
        assert_eq!(variable_id(Some(vars.as_slice()), "BAR"), "var-2");
    }

    #[test]
    fn test_empty_listing_resolves_to_empty() {
        let vars: Vec<ApiObject<Variable>> = vec![];
        assert_eq!(variable_id(Some(vars.as_slice()), "anything"), "");
    }

    #[test]
    fn test_absent_listing_resolves_to_empty() {
        assert_eq!(variable_id(None, "anything"), "");
        assert_eq!(policy_set_id(None, "anything"), "");
        assert_eq!(oauth_client_id(None, "github"), "");
    }

    #[test]
    fn test_exact_match_is_case_sensitive() {
        let sets = policy_sets(&[("ps-1", "TestPolicy"), ("ps-2", "testpolicy")]);
        assert_eq!(policy_set_id(Some(sets.as_slice()), "testpolicy"), "ps-2");
        assert_eq!(policy_set_id(Some(sets.as_slice()), "TESTPOLICY"), "");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let sets = policy_sets(&[("ps-1", "duplicate"), ("ps-2", "duplicate")]);
        assert_eq!(policy_set_id(Some(sets.as_slice()), "duplicate"), "ps-1");

        let listing = items(&[("a", "x"), ("b", "dup"), ("c", "dup")]);
        assert_eq!(resolve_id(Some(listing.as_slice()), "dup", MatchRule::Exact), "b");
    }

    #[test]
    fn test_empty_exact_criterion_matches_empty_name() {
        let listing = items(&[("ps-1", "non-empty"), ("ps-2", "")]);
        assert_eq!(resolve_id(Some(listing.as_slice()), "", MatchRule::Exact), "ps-2");

        let listing = items(&[("ps-1", "non-empty")]);
        assert_eq!(resolve_id(Some(listing.as_slice()), "", MatchRule::Exact), "");
    }

    #[test]
    fn test_oauth_substring_match() {
        let clients = oauth_clients(&[("o-1", "github_enterprise")]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "github"), "o-1");
    }

    #[test]
    fn test_oauth_match_ignores_case() {
        let clients = oauth_clients(&[("oc-1", "GitLab"), ("oc-2", "GitHub")]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "github"), "oc-2");
        assert_eq!(
            oauth_client_id(Some(clients.as_slice()), "GitHub"),
            oauth_client_id(Some(clients.as_slice()), "github")
        );
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "GITLAB"), "oc-1");
    }

    #[test]
    fn test_oauth_short_fragment_takes_first_match() {
        let clients = oauth_clients(&[
            ("oc-1", "bitbucket"),
            ("oc-2", "gitlab_hosted"),
            ("oc-3", "github"),
        ]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "git"), "oc-2");
    }

    #[test]
    fn test_oauth_empty_criterion_matches_first() {
        let clients = oauth_clients(&[("oc-1", "bitbucket"), ("oc-2", "github")]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), ""), "oc-1");
    }

    #[test]
    fn test_oauth_invalid_pattern_is_no_match() {
        let clients = oauth_clients(&[("oc-1", "git(hub")]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "git(hub"), "");
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "[unclosed"), "");
    }

    #[test]
    fn test_oauth_no_match() {
        let clients = oauth_clients(&[("oc-1", "GitHub")]);
        assert_eq!(oauth_client_id(Some(clients.as_slice()), "bitbucket"), "");
    }

    #[test]
    fn test_result_is_always_from_listing() {
        let listing = items(&[("a", "alpha"), ("b", "beta"), ("c", "gamma")]);
        for criterion in ["alpha", "beta", "gamma", "delta", ""] {
            let id = resolve_id(Some(listing.as_slice()), criterion, MatchRule::CaseInsensitivePattern);
            assert!(id.is_empty() || listing.iter().any(|i| i.id == id));
        }
    }
}
