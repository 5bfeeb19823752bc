//! Runs the checker over whole designs configured through `vnet.toml`.

use vnet_config::{load_config, load_config_from_str};
use vnet_diagnostics::{DiagnosticRenderer, DiagnosticSink, Severity, TerminalRenderer};
use vnet_netlist::{
    AssignTarget, CaseItem, Design, Edge, Expr, NodeKind, ProcessKind, SignalKind, Stmt,
};

use vnet_check::Checker;

/// A design with one finding per built-in rule except ring corruption,
/// which the construction API cannot produce.
fn flawed_design() -> Design {
    let mut d = Design::new();
    let clk = d.add_signal("clk", SignalKind::Wire, 1);
    let q = d.add_signal("q", SignalKind::Reg, 2);
    d.object_mut(q).as_signal_mut().unwrap().init = vnet_common::LogicVec::all_x(1);
    d.add_node(
        "dangling",
        NodeKind::Assign {
            target: AssignTarget::new(clk, 0, 0),
            value: Expr::int(0),
        },
        1,
    );
    let ev = d.add_event("clk", Edge::PosEdge, clk, "w").unwrap();

    let f = d.intern("f");
    let body = Stmt::seq(vec![
        Stmt::Wait {
            label: d.intern("w"),
            events: vec![ev],
            body: Some(Box::new(Stmt::UserTask {
                task: d.intern("reset_all"),
            })),
        },
        Stmt::Wait {
            label: d.intern("never"),
            events: Vec::new(),
            body: None,
        },
        Stmt::Case {
            selector: Expr::Call {
                function: f,
                args: Vec::new(),
            },
            items: vec![
                CaseItem {
                    guard: None,
                    stmt: None,
                },
                CaseItem {
                    guard: None,
                    stmt: None,
                },
            ],
        },
        Stmt::AssignMem {
            memory: d.intern("ram"),
            index: Expr::int(0),
            value: Expr::int(1),
            line: d.line("top.v", 30),
        },
    ]);
    let line = d.line("top.v", 20);
    d.add_process(ProcessKind::Always, line, body);
    d
}

fn codes(sink: &DiagnosticSink) -> Vec<String> {
    let mut codes: Vec<String> = sink.codes().iter().map(|c| c.to_string()).collect();
    codes.sort();
    codes
}

#[test]
fn every_rule_fires_once() {
    let sink = DiagnosticSink::new();
    Checker::with_defaults().run(&flawed_design(), &sink);
    assert_eq!(
        codes(&sink),
        vec!["E002", "E003", "E004", "E005", "E006", "W101", "W102", "W103"]
    );
    assert_eq!(sink.error_count(), 5);
}

#[test]
fn well_formed_design_is_clean() {
    let mut d = Design::new();
    let a = d.add_signal("a", SignalKind::Wire, 1);
    let y = d.add_signal("y", SignalKind::Reg, 1);
    let ra = d.add_signal_ref(a).unwrap();
    let asg = d.add_assign("y_set", y, 0, 0, Expr::Signal(ra)).unwrap();
    let line = d.line("ok.v", 1);
    d.add_process(ProcessKind::Initial, line, Stmt::seq(vec![Stmt::Assign(asg)]));

    let sink = DiagnosticSink::new();
    Checker::with_defaults().run(&d, &sink);
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn config_allow_and_deny() {
    let config = load_config_from_str(
        r#"
[check]
deny = ["unresolved-task"]
allow = ["init-width", "empty-call", "unresolved-function"]
"#,
    )
    .unwrap();
    let sink = DiagnosticSink::new();
    Checker::new(&config.check).run(&flawed_design(), &sink);

    assert_eq!(codes(&sink), vec!["E003", "E004", "E006", "W101", "W103"]);
    let task = sink
        .diagnostics()
        .into_iter()
        .find(|d| d.code.number == 101)
        .unwrap();
    assert_eq!(task.severity, Severity::Error);
}

#[test]
fn config_loaded_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("vnet.toml"),
        "[check]\nallow = [\"unresolved-memory\"]\n",
    )
    .unwrap();
    let config = load_config(dir.path()).unwrap();
    let sink = DiagnosticSink::new();
    Checker::new(&config.check).run(&flawed_design(), &sink);
    assert!(!codes(&sink).contains(&"W103".to_string()));
}

#[test]
fn rendered_report() {
    let sink = DiagnosticSink::new();
    Checker::with_defaults().run(&flawed_design(), &sink);
    let renderer = TerminalRenderer::new(false);
    let report: String = sink.diagnostics().iter().map(|d| renderer.render(d)).collect();
    assert!(report.contains("error[E006]: event wait never has no sensitivities\n  --> always top.v:20\n"));
    assert!(report.contains("warning[W101]: task reset_all is not defined\n"));
    assert!(report.contains("warning[W103]: write to undeclared memory ram\n  --> top.v:30\n"));
}
