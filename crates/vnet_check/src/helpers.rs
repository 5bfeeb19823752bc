//! Traversal helpers shared by the rules.

use vnet_netlist::{Design, Expr, NodeKind, Stmt};

/// A statement together with a description of where its tree is rooted.
pub struct StmtSite<'a> {
    /// `always ff.v:12`, `task pulse`, `function inc`, ...
    pub context: String,
    /// The statement.
    pub stmt: &'a Stmt,
}

/// Returns every statement of every process, task and function, each with
/// the context of its root.
pub fn statements_with_context(design: &Design) -> Vec<StmtSite<'_>> {
    let mut out = Vec::new();
    for process in design.processes() {
        let context = format!(
            "{} {}",
            process.kind.keyword(),
            process.line.display(design.names())
        );
        push_tree(&mut out, context, &process.body);
    }
    for (name, def) in design.sorted_by_name(design.tasks()) {
        push_tree(&mut out, format!("task {name}"), &def.body);
    }
    for (name, def) in design.sorted_by_name(design.functions()) {
        if let Some(body) = &def.body {
            push_tree(&mut out, format!("function {name}"), body);
        }
    }
    out
}

fn push_tree<'a>(out: &mut Vec<StmtSite<'a>>, context: String, root: &'a Stmt) {
    root.walk(&mut |stmt| {
        out.push(StmtSite {
            context: context.clone(),
            stmt,
        })
    });
}

/// Returns every expression in the design, sub-expressions included:
/// parameters, statement operands and the values held by assignment nodes.
pub fn all_exprs(design: &Design) -> Vec<&Expr> {
    let mut roots: Vec<&Expr> = design.parameters().values().collect();
    for site in statements_with_context(design) {
        roots.extend(site.stmt.exprs());
    }
    for id in design.nodes() {
        match design.object(id).as_node() {
            Some(NodeKind::Assign { value, .. }) => roots.push(value),
            Some(NodeKind::AssignNb { index, value, .. }) => {
                roots.extend(index.iter());
                roots.push(value);
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    for root in roots {
        root.walk(&mut |e| out.push(e));
    }
    out
}
