//! Human-readable dump of a design.
//!
//! The dump is a compatibility surface: section headers, line formats and
//! indentation offsets are fixed, so golden files from earlier runs stay
//! comparable. Rendering never mutates the design and fails only when it
//! finds a broken invariant, such as an assignment node connected to no
//! signal.

use crate::design::Design;
use crate::expr::{ConstValue, Expr};
use crate::ids::ObjectId;
use crate::link::PinRef;
use crate::node::{NodeKind, Udp};
use crate::object::Object;
use crate::stmt::Stmt;
use vnet_common::{ContentHash, InternalError, VnetResult};
use vnet_config::{DumpConfig, Section};

impl Design {
    /// Renders the sections selected by `config`.
    pub fn dump(&self, config: &DumpConfig) -> VnetResult<String> {
        let mut dumper = Dumper::new(self, config.attributes);
        for section in config.selected_sections() {
            dumper.section(section)?;
        }
        Ok(dumper.finish())
    }

    /// Renders every section with attributes.
    pub fn dump_all(&self) -> VnetResult<String> {
        self.dump(&DumpConfig::default())
    }

    /// Returns the content hash of [`dump_all`](Self::dump_all).
    pub fn fingerprint(&self) -> VnetResult<ContentHash> {
        Ok(ContentHash::of_text(&self.dump_all()?))
    }

    /// Renders an expression on one line.
    pub fn render_expr(&self, expr: &Expr) -> VnetResult<String> {
        Dumper::new(self, true).expr(expr)
    }

    /// Renders a statement tree at indent `ind`.
    pub fn render_stmt(&self, stmt: &Stmt, ind: usize) -> VnetResult<String> {
        let mut dumper = Dumper::new(self, true);
        dumper.stmt(stmt, ind)?;
        Ok(dumper.finish())
    }

    /// Renders one node with its pins at indent `ind`.
    pub fn render_node(&self, node: ObjectId, ind: usize) -> VnetResult<String> {
        let mut dumper = Dumper::new(self, true);
        dumper.node(node, ind)?;
        Ok(dumper.finish())
    }
}

struct Dumper<'a> {
    design: &'a Design,
    attributes: bool,
    out: String,
}

impl<'a> Dumper<'a> {
    fn new(design: &'a Design, attributes: bool) -> Self {
        Self {
            design,
            attributes,
            out: String::new(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, ind: usize, text: &str) {
        self.out.push_str(&" ".repeat(ind));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn name(&self, id: ObjectId) -> &'a str {
        self.design.object_name(id)
    }

    fn section(&mut self, section: Section) -> VnetResult<()> {
        self.line(0, section.header());
        let d = self.design;
        match section {
            Section::Parameters => {
                for (name, value) in d.sorted_by_name(d.parameters()) {
                    let text = format!("{name} = {};", self.expr(value)?);
                    self.line(4, &text);
                }
            }
            Section::Signals => {
                for id in d.signals() {
                    self.signal(id, 0)?;
                }
            }
            Section::Memories => {
                for (name, mem) in d.sorted_by_name(d.memories()) {
                    let text = format!("{name}[{}] [{}:{}]", mem.width, mem.high, mem.low);
                    self.line(0, &text);
                }
            }
            Section::Functions => {
                for (name, def) in d.sorted_by_name(d.functions()) {
                    self.line(0, &format!("function {name}"));
                    match &def.body {
                        Some(body) => self.stmt(body, 2)?,
                        None => self.line(2, "// NO STATEMENT"),
                    }
                }
            }
            Section::Tasks => {
                for (name, def) in d.sorted_by_name(d.tasks()) {
                    self.line(0, &format!("task {name};"));
                    for &port in &def.ports {
                        let info = d.object(port).as_signal().ok_or_else(|| {
                            InternalError::new(format!(
                                "port {} of task {name} is not a signal",
                                self.name(port)
                            ))
                        })?;
                        let text = format!("{} {};", info.port.keyword(), self.name(port));
                        self.line(4, &text);
                    }
                    self.stmt(&def.body, 4)?;
                    self.line(0, "endtask");
                }
            }
            Section::Nodes => {
                for id in d.nodes() {
                    self.node(id, 0)?;
                }
            }
            Section::Processes => {
                for process in d.processes() {
                    let header = format!(
                        "{}  /* {} */",
                        process.kind.keyword(),
                        process.line.display(d.names())
                    );
                    self.line(0, &header);
                    self.stmt(&process.body, 2)?;
                }
            }
        }
        Ok(())
    }

    // ---- structural objects ----

    fn signal(&mut self, id: ObjectId, ind: usize) -> VnetResult<()> {
        let obj = self.design.object(id);
        let info = obj
            .as_signal()
            .ok_or_else(|| InternalError::new(format!("{} is not a signal", self.name(id))))?;
        if info.init.width() != obj.pin_count() {
            return Err(InternalError::new(format!(
                "signal {} has {} pins but {} initial bits",
                self.name(id),
                obj.pin_count(),
                info.init.width()
            )));
        }
        let local = if info.local { " (local)" } else { "" };
        let text = format!(
            "{}: {}[{}]{local} {} init={}",
            info.kind,
            self.name(id),
            obj.pin_count(),
            obj.delay,
            info.init
        );
        self.line(ind, &text);
        self.attributes_of(obj, ind + 4);
        Ok(())
    }

    fn attributes_of(&mut self, obj: &Object, ind: usize) {
        if !self.attributes {
            return;
        }
        for (key, value) in &obj.attributes {
            self.line(ind, &format!("{key} = \"{value}\""));
        }
    }

    fn pins_of(&mut self, obj: &Object, ind: usize) {
        for idx in 0..obj.pin_count() {
            let mut text = format!("{} {}:", idx, obj.pin(idx).dir().tag());
            for PinRef { obj: other, idx: cpin } in self.design.ring(obj.pin_ref(idx)) {
                if self.design.object(other).is_signal() {
                    text.push_str(&format!(" {}[{cpin}]", self.name(other)));
                }
            }
            self.line(ind, &text);
        }
    }

    fn node(&mut self, id: ObjectId, ind: usize) -> VnetResult<()> {
        let obj = self.design.object(id);
        let kind = obj
            .as_node()
            .ok_or_else(|| InternalError::new(format!("{} is not a node", self.name(id))))?;
        let name = self.name(id);
        let delay = obj.delay;
        let mut with_attributes = false;
        match kind {
            NodeKind::Logic(ty) => {
                self.line(ind, &format!("logic: {} {delay} {name}", ty.keyword()));
                with_attributes = true;
            }
            NodeKind::AddSub => self.line(ind, &format!("adder: {name}")),
            NodeKind::Bufz => self.line(ind, &format!("bufz: {name}")),
            NodeKind::Const(value) => {
                self.line(ind, &format!("constant {}: {name}", value.literal()));
            }
            NodeKind::Assign { value, .. } => {
                let text = format!("procedural assign: {}", self.expr(value)?);
                self.line(ind, &text);
            }
            NodeKind::AssignNb { index, value, .. } => {
                let target = match index {
                    Some(index) => format!("{name}[{}]", self.expr(index)?),
                    None => name.to_string(),
                };
                let text = format!("procedural nb assign: {target} <= {}", self.expr(value)?);
                self.line(ind, &text);
            }
            NodeKind::SignalRef => self.line(ind, &format!("expression node: {name}")),
            NodeKind::Event { edge, waiter } => {
                let text = format!(
                    "event: {} {name} --> {}",
                    edge.keyword(),
                    self.design.resolve(*waiter)
                );
                self.line(ind, &text);
            }
            NodeKind::Udp(udp) if udp.is_sequential() => {
                self.line(ind, &format!("sequential udp {delay} {name}"));
                self.udp_table(udp, obj.pin_count(), name, ind + 6)?;
                with_attributes = true;
            }
            NodeKind::Udp(_) => {
                self.line(ind, &format!("combinational udp: {delay} {name}"));
                with_attributes = true;
            }
            NodeKind::Opaque { kind } => {
                self.line(ind, &format!("node: {kind} {delay} {name}"));
                with_attributes = true;
            }
        }
        self.pins_of(obj, ind + 4);
        if with_attributes {
            self.attributes_of(obj, ind + 4);
        }
        Ok(())
    }

    fn udp_table(&mut self, udp: &Udp, pin_count: u32, name: &str, ind: usize) -> VnetResult<()> {
        for (key, id) in udp.table() {
            let state = udp.state(id);
            let chars: Vec<char> = key.chars().collect();
            if chars.first() != Some(&state.out.as_char()) {
                return Err(InternalError::new(format!(
                    "udp {name}: state {key} does not start with its output {}",
                    state.out
                )));
            }
            if chars.len() < pin_count as usize {
                return Err(InternalError::new(format!(
                    "udp {name}: state {key} is shorter than {pin_count} pins"
                )));
            }
            let mut text = format!("{key} -->");
            for pin in 1..pin_count {
                let edges = state.edges(pin);
                for (target, input) in [(edges.zero, '0'), (edges.one, '1'), (edges.x, 'x')] {
                    if let Some(target) = target {
                        let mut next = chars.clone();
                        next[0] = udp.state(target).out.as_char();
                        next[pin as usize] = input;
                        text.push(' ');
                        text.extend(next);
                    }
                }
            }
            self.line(ind, &text);
        }
        self.line(ind, &format!("initial value == {}", udp.init()));
        Ok(())
    }

    // ---- expressions ----

    fn expr(&self, expr: &Expr) -> VnetResult<String> {
        let d = self.design;
        Ok(match expr {
            Expr::Const(ConstValue::Int(v)) => v.to_string(),
            Expr::Const(ConstValue::Vector(bits)) => bits.literal().to_string(),
            Expr::Const(ConstValue::Str(s)) => format!("\"{s}\""),
            Expr::Ident(name) => d.resolve(*name).to_string(),
            Expr::Signal(node) => self.name(*node).to_string(),
            Expr::SubSignal { signal, index } => {
                format!("{}[{}]", self.name(*signal), self.expr(index)?)
            }
            Expr::Memory { memory, index } => {
                format!("{}[{}]", d.resolve(*memory), self.expr(index)?)
            }
            Expr::Unary { op, operand } => format!("{op}({})", self.expr(operand)?),
            Expr::Binary { op, lhs, rhs } => {
                format!("({}){op}({})", self.expr(lhs)?, self.expr(rhs)?)
            }
            Expr::Concat(parts) => format!("{{{}}}", self.expr_list(parts)?),
            Expr::Ternary {
                cond,
                if_true,
                if_false,
            } => format!(
                "({})? ({}) : ({})",
                self.expr(cond)?,
                self.expr(if_true)?,
                self.expr(if_false)?
            ),
            Expr::Call { function, args } => {
                if args.is_empty() {
                    return Err(InternalError::new(format!(
                        "call of function {} has no arguments",
                        d.resolve(*function)
                    )));
                }
                format!("{}({})", d.resolve(*function), self.expr_list(args)?)
            }
            Expr::Opaque { kind } => format!("(?{kind})"),
        })
    }

    fn expr_list(&self, exprs: &[Expr]) -> VnetResult<String> {
        let parts = exprs
            .iter()
            .map(|e| self.expr(e))
            .collect::<VnetResult<Vec<_>>>()?;
        Ok(parts.join(", "))
    }

    // ---- statements ----

    fn stmt(&mut self, stmt: &Stmt, ind: usize) -> VnetResult<()> {
        match stmt {
            Stmt::Block { kind, stmts } => {
                self.line(ind, kind.keyword());
                for child in stmts {
                    self.stmt(child, ind + 4)?;
                }
                self.line(ind, "end");
            }
            Stmt::Condit {
                cond,
                then_branch,
                else_branch,
            } => {
                let text = format!("if ({})", self.expr(cond)?);
                self.line(ind, &text);
                match then_branch {
                    Some(then_branch) => self.stmt(then_branch, ind + 4)?,
                    None => self.line(ind + 4, "/* empty */ ;"),
                }
                if let Some(else_branch) = else_branch {
                    self.line(ind, "else");
                    self.stmt(else_branch, ind + 4)?;
                }
            }
            Stmt::Case { selector, items } => {
                let text = format!("case ({})", self.expr(selector)?);
                self.line(ind, &text);
                for item in items {
                    let guard = match &item.guard {
                        Some(guard) => format!("{}:", self.expr(guard)?),
                        None => "default:".to_string(),
                    };
                    match &item.stmt {
                        Some(body) => {
                            self.line(ind + 2, &guard);
                            self.stmt(body, ind + 6)?;
                        }
                        None => self.line(ind + 2, &format!("{guard} ;")),
                    }
                }
                self.line(ind, "endcase");
            }
            Stmt::Assign(node) => {
                let value = match self.design.object(*node).as_node() {
                    Some(NodeKind::Assign { value, .. }) => value,
                    _ => return Err(self.wrong_node(*node, "blocking assignment")),
                };
                let target = self.design.assign_target(*node)?;
                let bits = if target.msb == target.lsb {
                    target.msb.to_string()
                } else {
                    format!("{}:{}", target.msb, target.lsb)
                };
                let text = format!("{}[{bits}] = {};", self.name(target.signal), self.expr(value)?);
                self.line(ind, &text);
            }
            Stmt::AssignNb(node) => {
                let obj = self.design.object(*node);
                let (index, value) = match obj.as_node() {
                    Some(NodeKind::AssignNb { index, value, .. }) => (index, value),
                    _ => return Err(self.wrong_node(*node, "non-blocking assignment")),
                };
                let mut text = self.name(*node).to_string();
                if let Some(index) = index {
                    text.push_str(&format!("[{}]", self.expr(index)?));
                }
                text.push_str(" <= ");
                if obj.delay.rise != 0 {
                    text.push_str(&format!("#{} ", obj.delay.rise));
                }
                text.push_str(&format!("{};", self.expr(value)?));
                self.line(ind, &text);
            }
            Stmt::AssignMem {
                memory,
                index,
                value,
                line,
            } => {
                let marker = format!("/* {} */", line.display(self.design.names()));
                self.line(ind, &marker);
                let text = format!(
                    "{}[{}] = {};",
                    self.design.resolve(*memory),
                    self.expr(index)?,
                    self.expr(value)?
                );
                self.line(ind, &text);
            }
            Stmt::While { cond, body } => {
                let text = format!("while ({})", self.expr(cond)?);
                self.line(ind, &text);
                self.stmt(body, ind + 3)?;
            }
            Stmt::Forever { body } => {
                self.line(ind, "forever");
                self.stmt(body, ind + 2)?;
            }
            Stmt::Repeat { count, body } => {
                let text = format!("repeat ({})", self.expr(count)?);
                self.line(ind, &text);
                self.stmt(body, ind + 2)?;
            }
            Stmt::Delay { amount, body } => {
                let clause = format!("#{amount}");
                self.clause_with_body(&clause, body.as_deref(), ind)?;
            }
            Stmt::Wait {
                label,
                events,
                body,
            } => {
                if events.is_empty() {
                    return Err(InternalError::new(format!(
                        "event wait {} has no sensitivities",
                        self.design.resolve(*label)
                    )));
                }
                let mut sens = Vec::with_capacity(events.len());
                for &ev in events {
                    match self.design.object(ev).as_node() {
                        Some(NodeKind::Event { edge, .. }) => {
                            sens.push(format!("{} {}", edge.keyword(), self.name(ev)));
                        }
                        _ => return Err(self.wrong_node(ev, "event")),
                    }
                }
                let clause = format!(
                    "@({}) /* {} */",
                    sens.join(" or "),
                    self.design.resolve(*label)
                );
                self.clause_with_body(&clause, body.as_deref(), ind)?;
            }
            Stmt::SysTask { name, args } => {
                let mut text = self.design.resolve(*name).to_string();
                if !args.is_empty() {
                    let rendered = args
                        .iter()
                        .map(|arg| match arg {
                            Some(arg) => self.expr(arg),
                            None => Ok(String::new()),
                        })
                        .collect::<VnetResult<Vec<_>>>()?;
                    text.push_str(&format!("({})", rendered.join(", ")));
                }
                text.push(';');
                self.line(ind, &text);
            }
            Stmt::UserTask { task } => {
                let text = format!("{};", self.design.resolve(*task));
                self.line(ind, &text);
            }
            Stmt::Opaque { kind } => self.line(ind, &format!("// {kind}")),
        }
        Ok(())
    }

    /// Delay and event-wait clauses: body at +2, or `/* noop */` without one.
    fn clause_with_body(&mut self, clause: &str, body: Option<&Stmt>, ind: usize) -> VnetResult<()> {
        match body {
            Some(body) => {
                self.line(ind, clause);
                self.stmt(body, ind + 2)
            }
            None => {
                self.line(ind, &format!("{clause} /* noop */;"));
                Ok(())
            }
        }
    }

    fn wrong_node(&self, id: ObjectId, expected: &str) -> InternalError {
        let found = match self.design.object(id).as_node() {
            Some(kind) => kind.kind_name().to_string(),
            None => "signal".to_string(),
        };
        InternalError::new(format!(
            "{} is a {found} object where a {expected} node is required",
            self.name(id)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{BinaryOp, UnaryOp};
    use crate::node::{Edge, LogicType};
    use crate::signal::SignalKind;
    use crate::stmt::BlockKind;
    use vnet_common::{Logic, LogicVec};

    fn design_with_a() -> (Design, ObjectId) {
        let mut d = Design::new();
        let a = d.add_signal("a", SignalKind::Wire, 1);
        let ra = d.add_signal_ref(a).unwrap();
        (d, ra)
    }

    #[test]
    fn expression_text() {
        let (d, ra) = design_with_a();
        let a = || Expr::Signal(ra);
        let f = d.intern("f");
        let mem = d.intern("mem");
        let i = d.intern("i");

        let cases = [
            (Expr::binary(BinaryOp::Add, a(), Expr::int(1)), "(a)+(1)"),
            (Expr::binary(BinaryOp::from_code('N').unwrap(), a(), Expr::int(0)), "(a)!==(0)"),
            (Expr::unary(UnaryOp::Not, a()), "~(a)"),
            (
                Expr::Concat(vec![a(), Expr::vector(LogicVec::from_binary_str("0x").unwrap())]),
                "{a, 2'b0x}",
            ),
            (Expr::ternary(a(), Expr::int(1), Expr::int(0)), "(a)? (1) : (0)"),
            (
                Expr::Call {
                    function: f,
                    args: vec![a(), Expr::int(3)],
                },
                "f(a, 3)",
            ),
            (Expr::string("hi"), "\"hi\""),
            (Expr::Opaque { kind: "NetEScope".into() }, "(?NetEScope)"),
            (
                Expr::SubSignal {
                    signal: ra,
                    index: Box::new(Expr::int(0)),
                },
                "a[0]",
            ),
            (
                Expr::Memory {
                    memory: mem,
                    index: Box::new(Expr::Ident(i)),
                },
                "mem[i]",
            ),
        ];
        for (expr, text) in cases {
            assert_eq!(d.render_expr(&expr).unwrap(), text);
        }
    }

    #[test]
    fn call_without_arguments_is_internal_error() {
        let d = Design::new();
        let call = Expr::Call {
            function: d.intern("f"),
            args: Vec::new(),
        };
        let err = d.render_expr(&call).unwrap_err();
        assert!(err.message.contains("no arguments"));
    }

    #[test]
    fn empty_and_parallel_blocks() {
        let d = Design::new();
        assert_eq!(d.render_stmt(&Stmt::empty_block(), 0).unwrap(), "begin\nend\n");
        let fork = Stmt::Block {
            kind: BlockKind::Parallel,
            stmts: vec![Stmt::Opaque { kind: "NetDisable".into() }],
        };
        assert_eq!(
            d.render_stmt(&fork, 2).unwrap(),
            "  fork\n      // NetDisable\n  end\n"
        );
    }

    #[test]
    fn delay_with_and_without_body() {
        let d = Design::new();
        let noop = Stmt::Delay {
            amount: 5,
            body: None,
        };
        assert_eq!(d.render_stmt(&noop, 2).unwrap(), "  #5 /* noop */;\n");

        let finish = Stmt::SysTask {
            name: d.intern("$finish"),
            args: Vec::new(),
        };
        let delayed = Stmt::Delay {
            amount: 10,
            body: Some(Box::new(finish)),
        };
        assert_eq!(d.render_stmt(&delayed, 0).unwrap(), "#10\n  $finish;\n");
    }

    #[test]
    fn system_task_empty_slots() {
        let d = Design::new();
        let display = Stmt::SysTask {
            name: d.intern("$display"),
            args: vec![Some(Expr::int(1)), None, Some(Expr::string("x"))],
        };
        assert_eq!(d.render_stmt(&display, 0).unwrap(), "$display(1, , \"x\");\n");
    }

    #[test]
    fn loops() {
        let d = Design::new();
        let call = || Stmt::UserTask { task: d.intern("t") };
        let w = Stmt::While {
            cond: Expr::int(1),
            body: Box::new(call()),
        };
        assert_eq!(d.render_stmt(&w, 0).unwrap(), "while (1)\n   t;\n");
        let r = Stmt::Repeat {
            count: Expr::int(3),
            body: Box::new(call()),
        };
        assert_eq!(d.render_stmt(&r, 0).unwrap(), "repeat (3)\n  t;\n");
        let f = Stmt::Forever {
            body: Box::new(call()),
        };
        assert_eq!(d.render_stmt(&f, 1).unwrap(), " forever\n   t;\n");
    }

    #[test]
    fn event_wait() {
        let mut d = Design::new();
        let clk = d.add_signal("clk", SignalKind::Wire, 1);
        let rst = d.add_signal("rst", SignalKind::Wire, 1);
        let e1 = d.add_event("clk", Edge::PosEdge, clk, "w").unwrap();
        let e2 = d.add_event("rst", Edge::NegEdge, rst, "w").unwrap();
        let wait = Stmt::Wait {
            label: d.intern("w"),
            events: vec![e1, e2],
            body: None,
        };
        assert_eq!(
            d.render_stmt(&wait, 0).unwrap(),
            "@(posedge clk or negedge rst) /* w */ /* noop */;\n"
        );

        let empty = Stmt::Wait {
            label: d.intern("w"),
            events: Vec::new(),
            body: None,
        };
        let err = d.render_stmt(&empty, 0).unwrap_err();
        assert!(err.message.contains("no sensitivities"));
    }

    #[test]
    fn wait_on_non_event_node_fails() {
        let mut d = Design::new();
        let g = d.add_node("g", NodeKind::Bufz, 2);
        let wait = Stmt::Wait {
            label: d.intern("w"),
            events: vec![g],
            body: None,
        };
        assert!(d.render_stmt(&wait, 0).is_err());
    }

    #[test]
    fn assignments() {
        let mut d = Design::new();
        let y = d.add_signal("y", SignalKind::Reg, 8);
        let q = d.add_signal("q", SignalKind::Reg, 4);
        let i = d.intern("i");
        let blocking = d.add_assign("a1", y, 5, 2, Expr::int(3)).unwrap();
        let nb = d
            .add_assign_nb(q, 3, 0, Some(Expr::Ident(i)), Expr::int(1), 2)
            .unwrap();
        let plain = d.add_assign_nb(q, 3, 0, None, Expr::int(0), 0).unwrap();

        assert_eq!(d.render_stmt(&Stmt::Assign(blocking), 0).unwrap(), "y[5:2] = 3;\n");
        assert_eq!(d.render_stmt(&Stmt::AssignNb(nb), 0).unwrap(), "q[i] <= #2 1;\n");
        assert_eq!(d.render_stmt(&Stmt::AssignNb(plain), 0).unwrap(), "q <= 0;\n");
        assert!(d.render_stmt(&Stmt::Assign(nb), 0).is_err());
    }

    #[test]
    fn memory_write_has_line_marker() {
        let d = Design::new();
        let write = Stmt::AssignMem {
            memory: d.intern("mem"),
            index: Expr::int(3),
            value: Expr::int(7),
            line: d.line("t.v", 12),
        };
        assert_eq!(
            d.render_stmt(&write, 4).unwrap(),
            "    /* t.v:12 */\n    mem[3] = 7;\n"
        );
    }

    #[test]
    fn logic_gate_lists_connected_signals() {
        let mut d = Design::new();
        let a = d.add_signal("a", SignalKind::Wire, 1);
        let b = d.add_signal("b", SignalKind::Wire, 1);
        let g = d.add_node("g1", NodeKind::Logic(LogicType::And), 2);
        d.connect(PinRef::new(g, 0), PinRef::new(a, 0));
        d.connect(PinRef::new(g, 1), PinRef::new(b, 0));
        d.object_mut(g).set_pin_dir(0, crate::link::PinDir::Output);
        d.object_mut(g).set_pin_dir(1, crate::link::PinDir::Input);
        d.object_mut(g).set_attribute("cell", "AND2");
        assert_eq!(
            d.render_node(g, 0).unwrap(),
            "logic: and #(0,0,0) g1\n    0 O: a[0]\n    1 I: b[0]\n    cell = \"AND2\"\n"
        );
    }

    #[test]
    fn constant_and_signal_ref_nodes() {
        let (mut d, ra) = design_with_a();
        let c = d.add_node(
            "c0",
            NodeKind::Const(LogicVec::from_binary_str("01").unwrap()),
            2,
        );
        assert_eq!(
            d.render_node(c, 2).unwrap(),
            "  constant 2'b01: c0\n      0 p:\n      1 p:\n"
        );
        assert_eq!(d.render_node(ra, 0).unwrap(), "expression node: a\n    0 p: a[0]\n");
    }

    #[test]
    fn sequential_udp_table() {
        let mut d = Design::new();
        let mut udp = Udp::sequential(Logic::Zero);
        let s00 = udp.add_state("00", Logic::Zero);
        let s11 = udp.add_state("11", Logic::One);
        udp.set_transition(s00, 1, Logic::One, s11);
        udp.set_transition(s11, 1, Logic::Zero, s00);
        let ff = d.add_node("ff", NodeKind::Udp(udp), 2);
        assert_eq!(
            d.render_node(ff, 0).unwrap(),
            "sequential udp #(0,0,0) ff\n      00 --> 11\n      11 --> 00\n      \
             initial value == 0\n    0 p:\n    1 p:\n"
        );
    }

    #[test]
    fn udp_state_must_start_with_output() {
        let mut d = Design::new();
        let mut udp = Udp::sequential(Logic::X);
        udp.add_state("01", Logic::One);
        let bad = d.add_node("bad", NodeKind::Udp(udp), 2);
        let err = d.render_node(bad, 0).unwrap_err();
        assert!(err.message.contains("does not start with its output"));
    }

    #[test]
    fn combinational_udp_header() {
        let mut d = Design::new();
        let u = d.add_node("u", NodeKind::Udp(Udp::combinational()), 1);
        d.object_mut(u).delay = crate::object::Delay::new(1, 2, 3);
        assert_eq!(
            d.render_node(u, 0).unwrap(),
            "combinational udp: #(1,2,3) u\n    0 p:\n"
        );
    }

    #[test]
    fn empty_design_has_all_headers() {
        let d = Design::new();
        assert_eq!(
            d.dump_all().unwrap(),
            "ELABORATED PARAMETERS:\nELABORATED SIGNALS:\nELABORATED MEMORIES:\n\
             ELABORATED FUNCTION DEFINITIONS:\nELABORATED TASK DEFINITIONS:\n\
             ELABORATED NODES:\nELABORATED PROCESSES:\n"
        );
    }

    #[test]
    fn config_selects_sections_and_attributes() {
        let mut d = Design::new();
        let a = d.add_signal("a", SignalKind::Wire, 1);
        d.object_mut(a).set_attribute("keep", "true");
        d.add_memory("m", 8, 3, 0);

        let config = DumpConfig {
            attributes: false,
            sections: Some(vec!["signals".into()]),
        };
        assert_eq!(
            d.dump(&config).unwrap(),
            "ELABORATED SIGNALS:\nwire: a[1] #(0,0,0) init=x\n"
        );

        let with_attrs = DumpConfig {
            attributes: true,
            sections: Some(vec!["memories".into(), "signals".into()]),
        };
        assert_eq!(
            d.dump(&with_attrs).unwrap(),
            "ELABORATED SIGNALS:\nwire: a[1] #(0,0,0) init=x\n    keep = \"true\"\n\
             ELABORATED MEMORIES:\nm[8] [3:0]\n"
        );
    }

    #[test]
    fn local_signal_with_initial_value() {
        let mut d = Design::new();
        let t = d.add_signal("t", SignalKind::Reg, 2);
        let info = d.object_mut(t).as_signal_mut().unwrap();
        info.local = true;
        info.init.set(0, Logic::One);
        let config = DumpConfig {
            attributes: true,
            sections: Some(vec!["signals".into()]),
        };
        assert_eq!(
            d.dump(&config).unwrap(),
            "ELABORATED SIGNALS:\nreg: t[2] (local) #(0,0,0) init=x1\n"
        );
    }

    #[test]
    fn init_width_mismatch_is_internal_error() {
        let mut d = Design::new();
        let t = d.add_signal("t", SignalKind::Reg, 2);
        d.object_mut(t).as_signal_mut().unwrap().init = LogicVec::all_x(3);
        assert!(d.dump_all().is_err());
    }

    #[test]
    fn dump_is_idempotent() {
        let (mut d, ra) = design_with_a();
        d.set_parameter("P", Expr::binary(BinaryOp::Mul, Expr::int(2), Expr::Signal(ra)));
        let first = d.dump_all().unwrap();
        assert_eq!(first, d.dump_all().unwrap());
        assert_eq!(d.fingerprint().unwrap(), ContentHash::of_text(&first));
    }
}
