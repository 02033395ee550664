//! GraphQL query builder for subgraph field-projection queries.
//!
//! Field paths are dotted (`protocol.name`) and render as nested selection
//! sets. Filter values are always rendered as JSON string literals, which
//! subgraphs accept for `BigInt` and `BigDecimal` fields alike. Builder
//! methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use polygraph::{GraphQuery, OrderDirection};
//! let query = GraphQuery::new("swaps")
//!     .select(&["hash", "protocol.name"])
//!     .where_gte("amountInUSD", "1000")
//!     .order_by("timestamp")
//!     .order_direction(OrderDirection::Desc)
//!     .first(10)
//!     .build();
//! assert!(query.contains("amountInUSD_gte: \"1000\""));
//! ```

use std::fmt;

/// Sort direction for `orderDirection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => f.write_str("asc"),
            OrderDirection::Desc => f.write_str("desc"),
        }
    }
}

/// One node of the nested selection set.
#[derive(Debug, Clone)]
struct Selection {
    name: String,
    children: Vec<Selection>,
}

impl Selection {
    fn insert(nodes: &mut Vec<Selection>, segments: &[&str]) {
        let Some((head, rest)) = segments.split_first() else {
            return;
        };
        let idx = match nodes.iter().position(|n| n.name == *head) {
            Some(i) => i,
            None => {
                nodes.push(Selection {
                    name: head.to_string(),
                    children: Vec::new(),
                });
                nodes.len() - 1
            }
        };
        Selection::insert(&mut nodes[idx].children, rest);
    }

    fn render(&self, depth: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(depth);
        if self.children.is_empty() {
            out.push(format!("{}{}", pad, self.name));
        } else {
            out.push(format!("{}{} {{", pad, self.name));
            for child in &self.children {
                child.render(depth + 1, out);
            }
            out.push(format!("{}}}", pad));
        }
    }
}

/// Builds field-projection queries against a single subgraph entity.
pub struct GraphQuery {
    entity: String,
    paths: Vec<String>,
    where_clauses: Vec<(String, String)>,
    order_by_field: Option<String>,
    order_dir: Option<OrderDirection>,
    first_val: Option<usize>,
}

impl GraphQuery {
    /// Create a builder targeting the given top-level query field
    /// (e.g. `"swaps"`).
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            paths: Vec::new(),
            where_clauses: Vec::new(),
            order_by_field: None,
            order_dir: None,
            first_val: None,
        }
    }

    /// Append dotted field paths to project.
    pub fn select(&mut self, paths: &[&str]) -> &mut Self {
        self.paths.extend(paths.iter().map(|p| p.to_string()));
        self
    }

    /// Add an equality filter: `{field}: "value"`.
    pub fn where_eq(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push((field.to_string(), value.to_string()));
        self
    }

    /// Add a strictly-greater-than filter: `{field}_gt: "value"`.
    pub fn where_gt(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push((format!("{}_gt", field), value.to_string()));
        self
    }

    /// Add a greater-than-or-equal filter: `{field}_gte: "value"`.
    pub fn where_gte(&mut self, field: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push((format!("{}_gte", field), value.to_string()));
        self
    }

    pub fn order_by(&mut self, field: &str) -> &mut Self {
        self.order_by_field = Some(field.to_string());
        self
    }

    pub fn order_direction(&mut self, dir: OrderDirection) -> &mut Self {
        self.order_dir = Some(dir);
        self
    }

    /// Set the maximum number of rows to return (`first`).
    pub fn first(&mut self, n: usize) -> &mut Self {
        self.first_val = Some(n);
        self
    }

    /// The top-level query field this builder targets.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The projected field paths, in request order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Render the GraphQL document.
    pub fn build(&self) -> String {
        let mut args = Vec::new();
        if let Some(n) = self.first_val {
            args.push(format!("first: {}", n));
        }
        if let Some(field) = &self.order_by_field {
            args.push(format!("orderBy: {}", field));
        }
        if let Some(dir) = self.order_dir {
            args.push(format!("orderDirection: {}", dir));
        }
        if !self.where_clauses.is_empty() {
            let conds: Vec<String> = self
                .where_clauses
                .iter()
                .map(|(k, v)| format!("{}: {}", k, quote(v)))
                .collect();
            args.push(format!("where: {{{}}}", conds.join(", ")));
        }

        let head = if args.is_empty() {
            format!("  {} {{", self.entity)
        } else {
            format!("  {}({}) {{", self.entity, args.join(", "))
        };

        let mut tree: Vec<Selection> = Vec::new();
        for path in &self.paths {
            let segments: Vec<&str> = path.split('.').collect();
            Selection::insert(&mut tree, &segments);
        }

        let mut lines = vec!["{".to_string(), head];
        for node in &tree {
            node.render(2, &mut lines);
        }
        lines.push("  }".to_string());
        lines.push("}".to_string());
        lines.join("\n")
    }
}

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
