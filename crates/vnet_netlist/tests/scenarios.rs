//! End-to-end dumps of small elaborated designs.
//!
//! Each test builds a design the way elaboration would and compares the
//! rendered dump against the expected text line for line.

use vnet_common::LogicVec;
use vnet_config::DumpConfig;
use vnet_netlist::{
    BinaryOp, CaseItem, Design, Edge, Expr, LogicType, NodeKind, PinDir, PinRef, PortRole,
    ProcessKind, SignalKind, Stmt,
};

fn only(sections: &[&str]) -> DumpConfig {
    DumpConfig {
        attributes: true,
        sections: Some(sections.iter().map(|s| s.to_string()).collect()),
    }
}

#[test]
fn and_gate_between_two_wires() {
    let mut d = Design::new();
    let a = d.add_signal("a", SignalKind::Wire, 1);
    let b = d.add_signal("b", SignalKind::Wire, 1);
    let g = d.add_node("g1", NodeKind::Logic(LogicType::And), 2);
    d.connect(PinRef::new(g, 0), PinRef::new(a, 0));
    d.connect(PinRef::new(g, 1), PinRef::new(b, 0));
    d.object_mut(g).set_pin_dir(0, PinDir::Output);
    d.object_mut(g).set_pin_dir(1, PinDir::Input);

    let expected = "\
ELABORATED PARAMETERS:
ELABORATED SIGNALS:
wire: a[1] #(0,0,0) init=x
wire: b[1] #(0,0,0) init=x
ELABORATED MEMORIES:
ELABORATED FUNCTION DEFINITIONS:
ELABORATED TASK DEFINITIONS:
ELABORATED NODES:
logic: and #(0,0,0) g1
    0 O: a[0]
    1 I: b[0]
ELABORATED PROCESSES:
";
    assert_eq!(d.dump_all().unwrap(), expected);
}

#[test]
fn if_else_assigning_one_bit() {
    let mut d = Design::new();
    let x = d.add_signal("x", SignalKind::Wire, 1);
    let y = d.add_signal("y", SignalKind::Reg, 1);
    let rx = d.add_signal_ref(x).unwrap();
    let set = d.add_assign("y_set", y, 0, 0, Expr::int(1)).unwrap();
    let clr = d.add_assign("y_clr", y, 0, 0, Expr::int(0)).unwrap();
    let body = Stmt::condit(
        Expr::Signal(rx),
        Some(Stmt::Assign(set)),
        Some(Stmt::Assign(clr)),
    );
    let line = d.line("t.v", 3);
    d.add_process(ProcessKind::Initial, line, body);

    let expected = "\
ELABORATED NODES:
expression node: x
    0 p: x[0]
procedural assign: 1
    0 O: y[0]
procedural assign: 0
    0 O: y[0]
ELABORATED PROCESSES:
initial  /* t.v:3 */
  if (x)
      y[0] = 1;
  else
      y[0] = 0;
";
    assert_eq!(d.dump(&only(&["nodes", "processes"])).unwrap(), expected);
}

#[test]
fn if_without_then_branch() {
    let d = Design::new();
    let stmt = Stmt::condit(Expr::int(1), None, None);
    assert_eq!(d.render_stmt(&stmt, 0).unwrap(), "if (1)\n    /* empty */ ;\n");
}

#[test]
fn if_with_only_else_branch() {
    let mut d = Design::new();
    let c = d.add_signal("c", SignalKind::Wire, 1);
    let y = d.add_signal("y", SignalKind::Reg, 1);
    let rc = d.add_signal_ref(c).unwrap();
    let clear = d.add_assign("y_clear", y, 0, 0, Expr::int(0)).unwrap();
    let stmt = Stmt::condit(Expr::Signal(rc), None, Some(Stmt::Assign(clear)));
    let expected = "\
if (c)
    /* empty */ ;
else
    y[0] = 0;
";
    assert_eq!(d.render_stmt(&stmt, 0).unwrap(), expected);
}

#[test]
fn assignment_names_its_own_target_on_a_shared_net() {
    let mut d = Design::new();
    let y = d.add_signal("y", SignalKind::Reg, 4);
    let w = d.add_signal("w", SignalKind::Wire, 1);
    d.connect(PinRef::new(y, 2), PinRef::new(w, 0));
    let asg = d.add_assign("asg", y, 3, 2, Expr::int(1)).unwrap();
    assert_eq!(d.render_stmt(&Stmt::Assign(asg), 0).unwrap(), "y[3:2] = 1;\n");
}

#[test]
fn case_with_empty_default() {
    let mut d = Design::new();
    let sel = d.add_signal("sel", SignalKind::Wire, 2);
    let y = d.add_signal("y", SignalKind::Reg, 1);
    let rsel = d.add_signal_ref(sel).unwrap();
    let s0 = d.add_assign("y_clear", y, 0, 0, Expr::int(0)).unwrap();
    let s1 = d.add_assign("y_set", y, 0, 0, Expr::int(1)).unwrap();
    let body = Stmt::Case {
        selector: Expr::Signal(rsel),
        items: vec![
            CaseItem {
                guard: Some(Expr::vector(LogicVec::from_binary_str("00").unwrap())),
                stmt: Some(Stmt::Assign(s0)),
            },
            CaseItem {
                guard: Some(Expr::vector(LogicVec::from_binary_str("01").unwrap())),
                stmt: Some(Stmt::Assign(s1)),
            },
            CaseItem {
                guard: None,
                stmt: None,
            },
        ],
    };
    let line = d.line("t.v", 7);
    d.add_process(ProcessKind::Always, line, body);

    let expected = "\
ELABORATED PROCESSES:
always  /* t.v:7 */
  case (sel)
    2'b00:
          y[0] = 0;
    2'b01:
          y[0] = 1;
    default: ;
  endcase
";
    assert_eq!(d.dump(&only(&["processes"])).unwrap(), expected);
}

#[test]
fn full_design_dump() {
    let mut d = Design::new();
    d.set_parameter("WIDTH", Expr::int(8));
    d.set_parameter("DEPTH", Expr::binary(BinaryOp::Mul, Expr::int(2), Expr::int(4)));

    let clk = d.add_signal("clk", SignalKind::Wire, 1);
    let q = d.add_signal("q", SignalKind::Reg, 2);
    d.object_mut(q).set_attribute("keep", "true");
    let port = d.add_signal("pulse.d", SignalKind::Reg, 1);
    {
        let info = d.object_mut(port).as_signal_mut().unwrap();
        info.port = PortRole::Input;
        info.local = true;
    }

    d.add_memory("mem", 8, 15, 0);
    d.add_function("inc", Vec::new(), None);
    let display = Stmt::SysTask {
        name: d.intern("$display"),
        args: vec![Some(Expr::string("p"))],
    };
    d.add_task(
        "pulse",
        vec![port],
        Stmt::Delay {
            amount: 1,
            body: Some(Box::new(display)),
        },
    );

    let ev = d.add_event("clk", Edge::PosEdge, clk, "tick").unwrap();
    let nb = d
        .add_assign_nb(q, 1, 0, None, Expr::vector(LogicVec::from_binary_str("01").unwrap()), 0)
        .unwrap();
    let body = Stmt::Forever {
        body: Box::new(Stmt::Wait {
            label: d.intern("tick"),
            events: vec![ev],
            body: Some(Box::new(Stmt::seq(vec![
                Stmt::AssignNb(nb),
                Stmt::UserTask {
                    task: d.intern("pulse"),
                },
            ]))),
        }),
    };
    let line = d.line("ff.v", 12);
    d.add_process(ProcessKind::Always, line, body);

    let expected = "\
ELABORATED PARAMETERS:
    DEPTH = (2)*(4);
    WIDTH = 8;
ELABORATED SIGNALS:
wire: clk[1] #(0,0,0) init=x
reg: q[2] #(0,0,0) init=xx
    keep = \"true\"
reg: pulse.d[1] (local) #(0,0,0) init=x
ELABORATED MEMORIES:
mem[8] [15:0]
ELABORATED FUNCTION DEFINITIONS:
function inc
  // NO STATEMENT
ELABORATED TASK DEFINITIONS:
task pulse;
    input pulse.d;
    #1
      $display(\"p\");
endtask
ELABORATED NODES:
event: posedge clk --> tick
    0 I: clk[0]
procedural nb assign: q <= 2'b01
    0 O: q[0]
    1 O: q[1]
ELABORATED PROCESSES:
always  /* ff.v:12 */
  forever
    @(posedge clk) /* tick */
      begin
          q <= 2'b01;
          pulse;
      end
";
    let dump = d.dump_all().unwrap();
    assert_eq!(dump, expected);
    assert_eq!(d.fingerprint().unwrap(), vnet_common::ContentHash::of_text(expected));
}
