//! Route and search projection
//!
//! Pure derivations over the ordered effective menu: which entry is active
//! for the current path, which entries auto-expand, and which entries
//! survive the sidebar search filter. All of it is recomputed per route or
//! query change; nothing here is persisted.

use std::collections::HashMap;

use campus_common::validators::validate_search_query;

use crate::types::MenuEntry;

// =============================================================================
// Routing Table
// =============================================================================

/// A route the menu can mark active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    /// Route suffix (entry base route or sub-item route)
    pub route: String,
    /// Owning entry id
    pub entry_id: String,
}

/// Declarative routing table built from the effective menu
///
/// Rebuilt when the menu changes, evaluated once per route change. A route
/// matches a path if the path equals it or continues it at a `/` boundary;
/// among multiple matches the longest route wins, so a sub-item beats its
/// parent.
#[derive(Debug, Default)]
pub struct RoutingTable {
    targets: Vec<RouteTarget>,
}

impl RoutingTable {
    /// Build the table from the effective menu
    #[must_use]
    pub fn build(menu: &[MenuEntry]) -> Self {
        let mut targets = Vec::new();
        for entry in menu {
            targets.push(RouteTarget {
                route: entry.base_route().to_string(),
                entry_id: entry.id.clone(),
            });
            for sub in &entry.sub_items {
                targets.push(RouteTarget {
                    route: sub.route.clone(),
                    entry_id: entry.id.clone(),
                });
            }
        }
        Self { targets }
    }

    /// The most specific target matching the given path
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<&RouteTarget> {
        self.targets
            .iter()
            .filter(|target| route_matches(&target.route, path))
            .max_by_key(|target| target.route.len())
    }

    /// Id of the entry that owns the most specific matching route
    #[must_use]
    pub fn active_entry_id(&self, path: &str) -> Option<&str> {
        self.match_path(path).map(|target| target.entry_id.as_str())
    }
}

/// Whether a route matches a path
///
/// Exact match, or prefix match at a path-segment boundary.
#[must_use]
pub fn route_matches(route: &str, path: &str) -> bool {
    path == route || (path.starts_with(route) && path[route.len()..].starts_with('/'))
}

// =============================================================================
// Search Matching
// =============================================================================

/// Whether an entry's own label or route matches the query
///
/// `query` must already be lowercased.
fn entry_self_matches(entry: &MenuEntry, query: &str) -> bool {
    entry.label.to_lowercase().contains(query) || entry.id.to_lowercase().contains(query)
}

/// Whether any of the entry's sub-items match the query
fn any_sub_matches(entry: &MenuEntry, query: &str) -> bool {
    entry.sub_items.iter().any(|sub| {
        sub.label.to_lowercase().contains(query) || sub.route.to_lowercase().contains(query)
    })
}

/// Whether an entry survives the search filter
///
/// Case-insensitive substring match over the entry's label/route and every
/// sub-item's label/route.
#[must_use]
pub fn entry_matches_query(entry: &MenuEntry, query: &str) -> bool {
    let query = query.to_lowercase();
    entry_self_matches(entry, &query) || any_sub_matches(entry, &query)
}

// =============================================================================
// Sidebar Projection
// =============================================================================

/// A sub-item as the sidebar renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSubItem {
    /// Display label
    pub label: String,
    /// Route suffix
    pub route: String,
    /// Whether this sub-item's route is the active route
    pub is_active: bool,
}

/// A top-level entry as the sidebar renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Entry id (base route suffix)
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon reference
    pub icon: String,
    /// Whether selecting opens an inline panel
    pub opens_inline_panel: bool,
    /// Whether this entry owns the active route
    pub is_active: bool,
    /// Whether the sub-item list is expanded
    pub is_expanded: bool,
    /// Sub-items
    pub sub_items: Vec<SidebarSubItem>,
}

/// Project the ordered, filtered sidebar from the effective menu
///
/// * `order` - resolved total order over the menu's entry ids
/// * `path` - current path suffix within the tenant (e.g. `/students/add`)
/// * `query` - raw search input; invalid queries disable filtering
/// * `toggles` - user expansion toggles, by entry id
///
/// Expansion is forced for entries owning the active route's sub-item and
/// for search matches; otherwise it follows the user's toggle.
#[must_use]
pub fn project(
    menu: &[MenuEntry],
    order: &[String],
    path: &str,
    query: &str,
    toggles: &HashMap<String, bool>,
) -> Vec<SidebarEntry> {
    let table = RoutingTable::build(menu);
    let active = table.match_path(path);

    let filter = match validate_search_query(query) {
        Ok(trimmed) => trimmed.map(str::to_lowercase),
        Err(_) => None,
    };

    let by_id: HashMap<&str, &MenuEntry> =
        menu.iter().map(|entry| (entry.id.as_str(), entry)).collect();

    let mut sidebar = Vec::new();
    for id in order {
        let Some(entry) = by_id.get(id.as_str()).copied() else {
            continue;
        };

        if let Some(filter) = &filter
            && !entry_matches_query(entry, filter)
        {
            continue;
        }

        let is_active = active.is_some_and(|target| target.entry_id == entry.id);
        let active_route = active.map(|target| target.route.as_str());

        let sub_items: Vec<SidebarSubItem> = entry
            .sub_items
            .iter()
            .map(|sub| SidebarSubItem {
                label: sub.label.clone(),
                route: sub.route.clone(),
                is_active: active_route == Some(sub.route.as_str()),
            })
            .collect();

        let active_sub = is_active && sub_items.iter().any(|sub| sub.is_active);
        let search_forced = filter.is_some();
        let toggled = toggles.get(entry.id.as_str()).copied().unwrap_or(false);

        sidebar.push(SidebarEntry {
            id: entry.id.clone(),
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            opens_inline_panel: entry.opens_inline_panel,
            is_active,
            is_expanded: !entry.sub_items.is_empty() && (active_sub || search_forced || toggled),
            sub_items,
        });
    }

    sidebar
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuSubItem;

    fn entry(id: &str, label: &str, subs: &[(&str, &str)]) -> MenuEntry {
        MenuEntry {
            id: id.to_string(),
            label: label.to_string(),
            icon: "grid".to_string(),
            opens_inline_panel: false,
            sub_items: subs
                .iter()
                .map(|(label, route)| MenuSubItem {
                    label: label.to_string(),
                    route: route.to_string(),
                    has_edit_access: false,
                })
                .collect(),
        }
    }

    fn students_menu() -> Vec<MenuEntry> {
        vec![
            entry(
                "/students",
                "Students",
                &[
                    ("All Students", "/students"),
                    ("Add Student", "/students/add"),
                ],
            ),
            entry("/library", "Library", &[]),
            entry(
                "/fees",
                "Fees",
                &[("Fee Heads", "/fees/heads"), ("Fee Dues", "/fees/dues")],
            ),
        ]
    }

    fn order_of(menu: &[MenuEntry]) -> Vec<String> {
        menu.iter().map(|entry| entry.id.clone()).collect()
    }

    #[test]
    fn test_route_matches_boundaries() {
        assert!(route_matches("/students", "/students"));
        assert!(route_matches("/students", "/students/add"));
        assert!(!route_matches("/students", "/studentsextra"));
        assert!(!route_matches("/students/add", "/students"));
    }

    #[test]
    fn test_longest_prefix_wins() {
        // /students/add/123 activates the Add Student sub-item, not the
        // parent's base route
        let menu = students_menu();
        let table = RoutingTable::build(&menu);

        let target = table.match_path("/students/add/123").expect("match");
        assert_eq!(target.route, "/students/add");
        assert_eq!(target.entry_id, "/students");
    }

    #[test]
    fn test_no_match_for_unknown_path() {
        let menu = students_menu();
        let table = RoutingTable::build(&menu);
        assert!(table.match_path("/transport").is_none());
    }

    #[test]
    fn test_active_entry_for_base_route() {
        let menu = students_menu();
        let table = RoutingTable::build(&menu);
        assert_eq!(table.active_entry_id("/library"), Some("/library"));
        assert_eq!(table.active_entry_id("/library/loans"), Some("/library"));
    }

    #[test]
    fn test_search_filter_retains_matching_sub_items() {
        // Query "fee" keeps Fees (sub-item match) and drops Library
        let menu = students_menu();
        let order = order_of(&menu);
        let sidebar = project(&menu, &order, "/", "fee", &HashMap::new());

        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].id, "/fees");
        assert_eq!(sidebar[0].sub_items.len(), 2);
        // Search matches force expansion
        assert!(sidebar[0].is_expanded);
    }

    #[test]
    fn test_search_matches_sub_item_when_parent_label_does_not() {
        let menu = vec![entry(
            "/exams",
            "Examinations",
            &[("Marks Entry", "/exams/marks")],
        )];
        let order = order_of(&menu);
        let sidebar = project(&menu, &order, "/", "marks", &HashMap::new());

        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].id, "/exams");
    }

    #[test]
    fn test_search_case_insensitive() {
        let menu = students_menu();
        let order = order_of(&menu);
        let sidebar = project(&menu, &order, "/", "LIBRARY", &HashMap::new());
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].id, "/library");
    }

    #[test]
    fn test_empty_query_disables_filtering() {
        let menu = students_menu();
        let order = order_of(&menu);
        let sidebar = project(&menu, &order, "/", "   ", &HashMap::new());
        assert_eq!(sidebar.len(), menu.len());
    }

    #[test]
    fn test_active_sub_item_forces_expansion() {
        let menu = students_menu();
        let order = order_of(&menu);
        let sidebar = project(&menu, &order, "/students/add", "", &HashMap::new());

        let students = sidebar.iter().find(|e| e.id == "/students").expect("entry");
        assert!(students.is_active);
        assert!(students.is_expanded);
        let add = students
            .sub_items
            .iter()
            .find(|sub| sub.route == "/students/add")
            .expect("sub");
        assert!(add.is_active);
    }

    #[test]
    fn test_user_toggle_expands_without_active_route() {
        let menu = students_menu();
        let order = order_of(&menu);
        let mut toggles = HashMap::new();
        toggles.insert("/fees".to_string(), true);

        let sidebar = project(&menu, &order, "/library", "", &toggles);
        let fees = sidebar.iter().find(|e| e.id == "/fees").expect("entry");
        assert!(fees.is_expanded);
        let students = sidebar.iter().find(|e| e.id == "/students").expect("entry");
        assert!(!students.is_expanded);
    }

    #[test]
    fn test_entry_without_sub_items_never_expands() {
        let menu = students_menu();
        let order = order_of(&menu);
        let mut toggles = HashMap::new();
        toggles.insert("/library".to_string(), true);

        let sidebar = project(&menu, &order, "/library", "", &toggles);
        let library = sidebar.iter().find(|e| e.id == "/library").expect("entry");
        assert!(!library.is_expanded);
    }

    #[test]
    fn test_projection_follows_resolved_order() {
        let menu = students_menu();
        let order = vec![
            "/fees".to_string(),
            "/students".to_string(),
            "/library".to_string(),
        ];
        let sidebar = project(&menu, &order, "/", "", &HashMap::new());
        let rendered: Vec<&str> = sidebar.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(rendered, vec!["/fees", "/students", "/library"]);
    }

    #[test]
    fn test_order_ids_missing_from_menu_are_skipped() {
        let menu = students_menu();
        let order = vec!["/ghost".to_string(), "/library".to_string()];
        let sidebar = project(&menu, &order, "/", "", &HashMap::new());
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].id, "/library");
    }
}
