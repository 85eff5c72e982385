//! Package dependency ordering
//!
//! Packages may declare `depends`; dependencies are handled before the
//! package itself. Cycles are configuration errors.

use crate::domain::entities::PackageSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DependencyError {
    #[error("unknown package '{name}'{}", required_by_suffix(.required_by))]
    Unknown {
        name: String,
        required_by: Option<String>,
    },

    #[error("dependency cycle: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}

fn required_by_suffix(required_by: &Option<String>) -> String {
    required_by
        .as_ref()
        .map(|parent| format!(" (required by '{parent}')"))
        .unwrap_or_default()
}

/// Packages to handle for `root`, dependencies first, `root` last
///
/// Each package appears once even when several packages depend on it.
pub fn dependency_order(packages: &PackageSet, root: &str) -> Result<Vec<String>, DependencyError> {
    let mut order = Vec::new();
    let mut stack = Vec::new();
    visit(packages, root, None, &mut stack, &mut order)?;
    Ok(order)
}

fn visit(
    packages: &PackageSet,
    name: &str,
    required_by: Option<&str>,
    stack: &mut Vec<String>,
    order: &mut Vec<String>,
) -> Result<(), DependencyError> {
    if order.iter().any(|done| done == name) {
        return Ok(());
    }
    if let Some(start) = stack.iter().position(|open| open == name) {
        let mut chain = stack[start..].to_vec();
        chain.push(name.to_string());
        return Err(DependencyError::Cycle { chain });
    }

    let package = packages.get(name).ok_or_else(|| DependencyError::Unknown {
        name: name.to_string(),
        required_by: required_by.map(str::to_string),
    })?;

    stack.push(name.to_string());
    for dependency in package.depends() {
        visit(packages, dependency, Some(name), stack, order)?;
    }
    stack.pop();

    order.push(name.to_string());
    Ok(())
}
