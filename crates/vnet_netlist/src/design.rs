//! The design: sole owner of every object, definition and process.

use crate::arena::Arena;
use crate::def::{FuncDef, TaskDef};
use crate::expr::Expr;
use crate::ids::ObjectId;
use crate::link::{self, Pin, PinDir, PinRef, Ring};
use crate::memory::Memory;
use crate::node::{AssignTarget, Edge, NodeKind};
use crate::object::{Object, ObjectKind};
use crate::process::{Process, ProcessKind};
use crate::signal::{SignalInfo, SignalKind};
use crate::stmt::Stmt;
use std::collections::BTreeMap;
use vnet_common::{Ident, InternalError, Interner, LineRef, VnetResult};

/// A fully elaborated design.
///
/// Signals and nodes each sit on a circular list in creation order;
/// memories, tasks, functions and parameters are keyed by name; processes
/// are kept in source order. Objects are never removed, so every
/// [`ObjectId`] and [`PinRef`] stays valid for the design's lifetime.
#[derive(Debug, Default)]
pub struct Design {
    names: Interner,
    objects: Arena<ObjectId, Object>,
    pin_total: usize,
    signal_tail: Option<ObjectId>,
    node_tail: Option<ObjectId>,
    parameters: BTreeMap<Ident, Expr>,
    memories: BTreeMap<Ident, Memory>,
    functions: BTreeMap<Ident, FuncDef>,
    tasks: BTreeMap<Ident, TaskDef>,
    processes: Vec<Process>,
}

impl Design {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the interner holding every name of the design.
    pub fn names(&self) -> &Interner {
        &self.names
    }

    /// Interns a name.
    pub fn intern(&self, name: &str) -> Ident {
        self.names.get_or_intern(name)
    }

    /// Resolves an interned name.
    pub fn resolve(&self, name: Ident) -> &str {
        self.names.resolve(name)
    }

    /// Creates a source line marker.
    pub fn line(&self, file: &str, line: u32) -> LineRef {
        LineRef::new(self.intern(file), line)
    }

    // ---- objects ----

    /// Returns an object.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this design.
    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id]
    }

    /// Returns an object mutably, for delays, attributes, pin directions and
    /// signal data. Pin count and kind cannot change.
    pub fn object_mut(&mut self, id: ObjectId) -> &mut Object {
        &mut self.objects[id]
    }

    /// Returns the name of an object.
    pub fn object_name(&self, id: ObjectId) -> &str {
        self.resolve(self.objects[id].name)
    }

    /// Returns the number of objects (signals and nodes).
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the number of pins over all objects.
    pub fn pin_total(&self) -> usize {
        self.pin_total
    }

    fn alloc(&mut self, name: &str, pin_count: u32, kind: ObjectKind) -> ObjectId {
        let name = self.intern(name);
        let id = self.objects.next_id();
        self.objects.alloc(Object::new(id, name, pin_count, kind));
        self.pin_total += pin_count as usize;
        id
    }

    fn append_to_list(&mut self, id: ObjectId, tail: Option<ObjectId>) {
        if let Some(tail) = tail {
            let first = self.objects[tail].list_next();
            self.objects[id].set_list_next(first);
            self.objects[tail].set_list_next(id);
        }
    }

    /// Adds a signal of `width` bits with unknown initial value to the end of
    /// the signal list.
    pub fn add_signal(&mut self, name: &str, kind: SignalKind, width: u32) -> ObjectId {
        let id = self.alloc(
            name,
            width,
            ObjectKind::Signal(SignalInfo::new(kind, width)),
        );
        self.append_to_list(id, self.signal_tail);
        self.signal_tail = Some(id);
        id
    }

    /// Adds a node with `pin_count` unconnected pins to the end of the node
    /// list.
    pub fn add_node(&mut self, name: &str, kind: NodeKind, pin_count: u32) -> ObjectId {
        let id = self.alloc(name, pin_count, ObjectKind::Node(kind));
        self.append_to_list(id, self.node_tail);
        self.node_tail = Some(id);
        id
    }

    fn expect_signal(&self, id: ObjectId) -> VnetResult<&SignalInfo> {
        self.objects[id].as_signal().ok_or_else(|| {
            InternalError::new(format!("object {} is not a signal", self.object_name(id)))
        })
    }

    /// Adds a signal-reference node named after `signal`, with one pin per
    /// bit joined to the matching signal pin. Use the returned id in
    /// [`Expr::Signal`] and [`Expr::SubSignal`].
    pub fn add_signal_ref(&mut self, signal: ObjectId) -> VnetResult<ObjectId> {
        self.expect_signal(signal)?;
        let width = self.objects[signal].pin_count();
        let name = self.object_name(signal).to_string();
        let node = self.add_node(&name, NodeKind::SignalRef, width);
        for idx in 0..width {
            self.connect_disjoint(PinRef::new(node, idx), PinRef::new(signal, idx));
        }
        Ok(node)
    }

    fn join_range(
        &mut self,
        node: ObjectId,
        signal: ObjectId,
        msb: u32,
        lsb: u32,
        dir: PinDir,
    ) {
        for (idx, bit) in (lsb..=msb).enumerate() {
            let idx = idx as u32;
            self.objects[node].set_pin_dir(idx, dir);
            self.connect_disjoint(PinRef::new(node, idx), PinRef::new(signal, bit));
        }
    }

    fn check_range(&self, signal: ObjectId, msb: u32, lsb: u32) -> VnetResult<()> {
        self.expect_signal(signal)?;
        let width = self.objects[signal].pin_count();
        if lsb > msb || msb >= width {
            return Err(InternalError::new(format!(
                "bit range [{msb}:{lsb}] is outside signal {}[{width}]",
                self.object_name(signal)
            )));
        }
        Ok(())
    }

    /// Adds a blocking assignment node driving bits `[msb:lsb]` of `target`.
    /// Refer to it from [`Stmt::Assign`].
    pub fn add_assign(
        &mut self,
        name: &str,
        target: ObjectId,
        msb: u32,
        lsb: u32,
        value: Expr,
    ) -> VnetResult<ObjectId> {
        self.check_range(target, msb, lsb)?;
        let kind = NodeKind::Assign {
            target: AssignTarget::new(target, msb, lsb),
            value,
        };
        let node = self.add_node(name, kind, msb - lsb + 1);
        self.join_range(node, target, msb, lsb, PinDir::Output);
        Ok(node)
    }

    /// Adds a non-blocking assignment node named after `target`, driving
    /// bits `[msb:lsb]`. A non-zero `delay` is stored as the node's rise
    /// time. Refer to it from [`Stmt::AssignNb`].
    pub fn add_assign_nb(
        &mut self,
        target: ObjectId,
        msb: u32,
        lsb: u32,
        index: Option<Expr>,
        value: Expr,
        delay: u64,
    ) -> VnetResult<ObjectId> {
        self.check_range(target, msb, lsb)?;
        let name = self.object_name(target).to_string();
        let kind = NodeKind::AssignNb {
            target: AssignTarget::new(target, msb, lsb),
            index,
            value,
        };
        let node = self.add_node(&name, kind, msb - lsb + 1);
        self.objects[node].delay.rise = delay;
        self.join_range(node, target, msb, lsb, PinDir::Output);
        Ok(node)
    }

    /// Adds an event detector watching every bit of `source`, waking the
    /// event wait labelled `waiter`.
    pub fn add_event(
        &mut self,
        name: &str,
        edge: Edge,
        source: ObjectId,
        waiter: &str,
    ) -> VnetResult<ObjectId> {
        self.expect_signal(source)?;
        let width = self.objects[source].pin_count();
        let waiter = self.intern(waiter);
        let node = self.add_node(name, NodeKind::Event { edge, waiter }, width);
        if width > 0 {
            self.join_range(node, source, width - 1, 0, PinDir::Input);
        }
        Ok(node)
    }

    /// Returns the bits written by an assignment node, as recorded when the
    /// node was built. Fails if the node has no pins or if its pin 0 does
    /// not share a net with the lsb of the target.
    pub fn assign_target(&self, node: ObjectId) -> VnetResult<AssignTarget> {
        let obj = &self.objects[node];
        let target = match obj.as_node() {
            Some(NodeKind::Assign { target, .. } | NodeKind::AssignNb { target, .. }) => *target,
            _ => {
                return Err(InternalError::new(format!(
                    "{} is not an assignment node",
                    self.object_name(node)
                )))
            }
        };
        if obj.pin_count() == 0 {
            return Err(InternalError::new(format!(
                "assignment node {} has no pins",
                self.object_name(node)
            )));
        }
        let lsb_pin = PinRef::new(target.signal, target.lsb);
        if !self.is_linked(obj.pin_ref(0), lsb_pin) {
            return Err(InternalError::new(format!(
                "assignment node {} is not connected to {}[{}]",
                self.object_name(node),
                self.object_name(target.signal),
                target.lsb
            )));
        }
        Ok(target)
    }

    /// Looks up a signal by name. Linear in the number of signals.
    pub fn find_signal(&self, name: &str) -> Option<ObjectId> {
        let name = self.names.get(name)?;
        self.signals().find(|&id| self.objects[id].name == name)
    }

    // ---- lists ----

    /// Returns the first signal in creation order.
    pub fn first_signal(&self) -> Option<ObjectId> {
        self.signal_tail.map(|tail| self.objects[tail].list_next())
    }

    /// Returns the first node in creation order.
    pub fn first_node(&self) -> Option<ObjectId> {
        self.node_tail.map(|tail| self.objects[tail].list_next())
    }

    /// Returns the object after `id` on its (circular) list.
    pub fn next_in_list(&self, id: ObjectId) -> ObjectId {
        self.objects[id].list_next()
    }

    /// Iterates over all signals in creation order.
    pub fn signals(&self) -> ObjectList<'_> {
        ObjectList::new(&self.objects, self.first_signal())
    }

    /// Iterates over all nodes in creation order.
    pub fn nodes(&self) -> ObjectList<'_> {
        ObjectList::new(&self.objects, self.first_node())
    }

    /// Iterates over the list containing `start`, beginning at `start` and
    /// wrapping around once.
    pub fn list_from(&self, start: ObjectId) -> ObjectList<'_> {
        ObjectList::new(&self.objects, Some(start))
    }

    // ---- connectivity ----

    /// Returns a pin.
    pub fn pin(&self, p: PinRef) -> &Pin {
        link::pin(&self.objects, p)
    }

    /// Joins the nets of `a` and `b`. Does nothing if they already share a
    /// net, so the ring size is `m + n` after joining distinct rings of
    /// sizes `m` and `n`.
    ///
    /// This is the checked form: the membership test walks the net of `a`,
    /// so it is linear in that net's size. Builders joining freshly created
    /// pins use [`connect_disjoint`](Self::connect_disjoint).
    pub fn connect(&mut self, a: PinRef, b: PinRef) {
        if link::is_linked(&self.objects, a, b) {
            return;
        }
        link::splice(&mut self.objects, a, b);
    }

    /// Joins the nets of two pins known to be on different nets, in constant
    /// time. Joining two pins of one net this way splits the net, so use
    /// [`connect`](Self::connect) unless the caller tracks membership.
    pub fn connect_disjoint(&mut self, a: PinRef, b: PinRef) {
        debug_assert!(
            !link::is_linked(&self.objects, a, b),
            "connect_disjoint on pins of one net"
        );
        link::splice(&mut self.objects, a, b);
    }

    /// Removes `p` from its net. No-op if it is unconnected.
    pub fn disconnect(&mut self, p: PinRef) {
        link::unlink(&mut self.objects, p);
    }

    /// Detaches every pin of `obj` from its net.
    pub fn isolate(&mut self, obj: ObjectId) {
        for idx in 0..self.objects[obj].pin_count() {
            link::unlink(&mut self.objects, PinRef::new(obj, idx));
        }
    }

    /// Iterates over every other pin on the net of `p`.
    pub fn ring(&self, p: PinRef) -> Ring<'_> {
        Ring::new(&self.objects, p)
    }

    /// Returns the number of pins on the net of `p`, including `p`.
    pub fn ring_len(&self, p: PinRef) -> usize {
        self.ring(p).count() + 1
    }

    /// Returns `true` if `a` and `b` are on the same net.
    pub fn is_linked(&self, a: PinRef, b: PinRef) -> bool {
        link::is_linked(&self.objects, a, b)
    }

    /// Returns `true` if `p` is on a net with any other pin.
    pub fn is_connected(&self, p: PinRef) -> bool {
        self.pin(p).next() != p
    }

    /// Points the successor link of `p` at `next` and leaves every other
    /// link alone, breaking the net. Only for exercising ring verification.
    #[cfg(any(test, feature = "test-support"))]
    #[doc(hidden)]
    pub fn set_next_unchecked(&mut self, p: PinRef, next: PinRef) {
        link::set_next(&mut self.objects, p, next);
    }

    /// Walks the net of `p` checking every link, returning its size.
    pub fn verify_ring(&self, p: PinRef) -> VnetResult<usize> {
        link::verify(&self.objects, p, self.pin_total.max(1)).map_err(InternalError::from)
    }

    // ---- name-keyed tables ----

    /// Records the elaborated value of a parameter.
    pub fn set_parameter(&mut self, name: &str, value: Expr) -> Ident {
        let name = self.intern(name);
        self.parameters.insert(name, value);
        name
    }

    /// Returns a parameter's value.
    pub fn parameter(&self, name: Ident) -> Option<&Expr> {
        self.parameters.get(&name)
    }

    /// Returns all parameters.
    pub fn parameters(&self) -> &BTreeMap<Ident, Expr> {
        &self.parameters
    }

    /// Declares a memory. Redeclaring replaces the previous one.
    pub fn add_memory(&mut self, name: &str, width: u32, high: i64, low: i64) -> Ident {
        let name = self.intern(name);
        self.memories
            .insert(name, Memory::new(name, width, high, low));
        name
    }

    /// Returns a memory.
    pub fn memory(&self, name: Ident) -> Option<&Memory> {
        self.memories.get(&name)
    }

    /// Returns all memories.
    pub fn memories(&self) -> &BTreeMap<Ident, Memory> {
        &self.memories
    }

    /// Adds a task definition.
    pub fn add_task(&mut self, name: &str, ports: Vec<ObjectId>, body: Stmt) -> Ident {
        let name = self.intern(name);
        self.tasks.insert(name, TaskDef { name, ports, body });
        name
    }

    /// Returns a task definition.
    pub fn task(&self, name: Ident) -> Option<&TaskDef> {
        self.tasks.get(&name)
    }

    /// Returns all task definitions.
    pub fn tasks(&self) -> &BTreeMap<Ident, TaskDef> {
        &self.tasks
    }

    /// Adds a function definition.
    pub fn add_function(&mut self, name: &str, ports: Vec<ObjectId>, body: Option<Stmt>) -> Ident {
        let name = self.intern(name);
        self.functions.insert(name, FuncDef { name, ports, body });
        name
    }

    /// Returns a function definition.
    pub fn function(&self, name: Ident) -> Option<&FuncDef> {
        self.functions.get(&name)
    }

    /// Returns all function definitions.
    pub fn functions(&self) -> &BTreeMap<Ident, FuncDef> {
        &self.functions
    }

    /// Returns the entries of a name-keyed table sorted by name text.
    pub fn sorted_by_name<'a, T>(&'a self, table: &'a BTreeMap<Ident, T>) -> Vec<(&'a str, &'a T)> {
        let mut entries: Vec<_> = table
            .iter()
            .map(|(&name, value)| (self.resolve(name), value))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    // ---- processes ----

    /// Appends a process.
    pub fn add_process(&mut self, kind: ProcessKind, line: LineRef, body: Stmt) {
        self.processes.push(Process::new(kind, line, body));
    }

    /// Returns the processes in source order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates over every statement of every process, task and function.
    pub fn all_statements(&self) -> Vec<&Stmt> {
        let roots = self
            .processes
            .iter()
            .map(|p| &p.body)
            .chain(self.tasks.values().map(|t| &t.body))
            .chain(self.functions.values().filter_map(|f| f.body.as_ref()));
        let mut out = Vec::new();
        for root in roots {
            root.walk(&mut |s| out.push(s));
        }
        out
    }
}

/// Iterator over a circular signal or node list, visiting each member once.
pub struct ObjectList<'a> {
    objects: &'a Arena<ObjectId, Object>,
    start: Option<ObjectId>,
    cur: Option<ObjectId>,
}

impl<'a> ObjectList<'a> {
    fn new(objects: &'a Arena<ObjectId, Object>, start: Option<ObjectId>) -> Self {
        Self {
            objects,
            start,
            cur: start,
        }
    }
}

impl Iterator for ObjectList<'_> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let cur = self.cur?;
        let next = self.objects[cur].list_next();
        self.cur = if Some(next) == self.start {
            None
        } else {
            Some(next)
        };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LogicType;

    #[test]
    fn empty_design_lists() {
        let d = Design::new();
        assert!(d.first_signal().is_none());
        assert!(d.first_node().is_none());
        assert_eq!(d.signals().count(), 0);
        assert_eq!(d.nodes().count(), 0);
    }

    #[test]
    fn lists_keep_creation_order() {
        let mut d = Design::new();
        let a = d.add_signal("a", SignalKind::Wire, 1);
        let g = d.add_node("g", NodeKind::Logic(LogicType::And), 3);
        let b = d.add_signal("b", SignalKind::Reg, 1);
        let c = d.add_signal("c", SignalKind::Reg, 1);

        assert_eq!(d.signals().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(d.nodes().collect::<Vec<_>>(), vec![g]);
        assert_eq!(d.first_signal(), Some(a));
        assert_eq!(d.next_in_list(c), a);
        assert_eq!(d.next_in_list(g), g);
    }

    #[test]
    fn enumeration_from_any_member_is_total() {
        let mut d = Design::new();
        let ids: Vec<_> = (0..5)
            .map(|i| d.add_signal(&format!("s{i}"), SignalKind::Wire, 1))
            .collect();
        for &start in &ids {
            let mut seen: Vec<_> = d.list_from(start).collect();
            assert_eq!(seen[0], start);
            seen.sort();
            assert_eq!(seen, ids);
        }
    }

    #[test]
    fn signal_ref_joins_every_bit() {
        let mut d = Design::new();
        let bus = d.add_signal("bus", SignalKind::Wire, 4);
        let r = d.add_signal_ref(bus).unwrap();
        assert_eq!(d.object_name(r), "bus");
        for idx in 0..4 {
            assert!(d.is_linked(PinRef::new(r, idx), PinRef::new(bus, idx)));
        }
        assert!(!d.is_linked(PinRef::new(r, 0), PinRef::new(bus, 1)));
    }

    #[test]
    fn signal_ref_requires_a_signal() {
        let mut d = Design::new();
        let g = d.add_node("g", NodeKind::Bufz, 2);
        let err = d.add_signal_ref(g).unwrap_err();
        assert!(err.message.contains("not a signal"));
    }

    #[test]
    fn assign_target_is_recorded_at_build() {
        let mut d = Design::new();
        let y = d.add_signal("y", SignalKind::Reg, 8);
        let n = d.add_assign("asg", y, 5, 2, Expr::int(3)).unwrap();
        let t = d.assign_target(n).unwrap();
        assert_eq!(t, AssignTarget { signal: y, msb: 5, lsb: 2 });
        assert_eq!(d.object(n).pin(0).dir(), PinDir::Output);
    }

    #[test]
    fn assign_target_survives_shared_net() {
        let mut d = Design::new();
        let y = d.add_signal("y", SignalKind::Reg, 4);
        let w = d.add_signal("w", SignalKind::Wire, 1);
        d.connect(PinRef::new(y, 2), PinRef::new(w, 0));
        let n = d.add_assign("asg", y, 3, 2, Expr::int(1)).unwrap();
        assert_eq!(d.assign_target(n).unwrap(), AssignTarget::new(y, 3, 2));
        assert!(d.is_linked(PinRef::new(n, 0), PinRef::new(w, 0)));
    }

    #[test]
    fn verify_ring_reports_broken_back_link() {
        let mut d = Design::new();
        let pins: Vec<_> = (0..3)
            .map(|i| PinRef::new(d.add_signal(&format!("s{i}"), SignalKind::Wire, 1), 0))
            .collect();
        d.connect(pins[0], pins[1]);
        d.connect(pins[1], pins[2]);
        assert_eq!(d.verify_ring(pins[0]).unwrap(), 3);

        let last = d.ring(pins[0]).last().unwrap();
        d.set_next_unchecked(last, d.pin(pins[0]).next());
        let err = d.verify_ring(pins[0]).unwrap_err();
        assert!(err.message.contains("not the predecessor"));
    }

    #[test]
    fn assign_rejects_bad_range() {
        let mut d = Design::new();
        let y = d.add_signal("y", SignalKind::Reg, 2);
        assert!(d.add_assign("a", y, 2, 0, Expr::int(0)).is_err());
        assert!(d.add_assign("a", y, 0, 1, Expr::int(0)).is_err());
    }

    #[test]
    fn assign_target_errors() {
        let mut d = Design::new();
        let y = d.add_signal("y", SignalKind::Reg, 1);
        let assign = |value| NodeKind::Assign {
            target: AssignTarget::new(y, 0, 0),
            value,
        };
        let empty = d.add_node("e", assign(Expr::int(0)), 0);
        let err = d.assign_target(empty).unwrap_err();
        assert!(err.message.contains("has no pins"));

        let floating = d.add_node("f", assign(Expr::int(0)), 1);
        let err = d.assign_target(floating).unwrap_err();
        assert!(err.message.contains("not connected to y[0]"));

        let gate = d.add_node("g", NodeKind::Bufz, 1);
        let err = d.assign_target(gate).unwrap_err();
        assert!(err.message.contains("not an assignment node"));
    }

    #[test]
    fn nb_assign_carries_delay_and_target_name() {
        let mut d = Design::new();
        let q = d.add_signal("q", SignalKind::Reg, 1);
        let n = d.add_assign_nb(q, 0, 0, None, Expr::int(1), 5).unwrap();
        assert_eq!(d.object_name(n), "q");
        assert_eq!(d.object(n).delay.rise, 5);
    }

    #[test]
    fn event_watches_all_bits() {
        let mut d = Design::new();
        let clk = d.add_signal("clk", SignalKind::Wire, 1);
        let ev = d.add_event("clk_pos", Edge::PosEdge, clk, "wait0").unwrap();
        assert!(d.is_linked(PinRef::new(ev, 0), PinRef::new(clk, 0)));
        assert_eq!(d.object(ev).pin(0).dir(), PinDir::Input);
        match d.object(ev).as_node() {
            Some(NodeKind::Event { waiter, .. }) => assert_eq!(d.resolve(*waiter), "wait0"),
            other => panic!("unexpected node kind {other:?}"),
        }
    }

    #[test]
    fn find_signal_by_name() {
        let mut d = Design::new();
        let a = d.add_signal("a", SignalKind::Wire, 1);
        d.add_node("a_ref", NodeKind::SignalRef, 1);
        assert_eq!(d.find_signal("a"), Some(a));
        assert_eq!(d.find_signal("a_ref"), None);
        assert_eq!(d.find_signal("zz"), None);
    }

    #[test]
    fn tables_sorted_by_name_text() {
        let mut d = Design::new();
        d.set_parameter("WIDTH", Expr::int(8));
        d.set_parameter("DEPTH", Expr::int(4));
        let sorted: Vec<&str> = d
            .sorted_by_name(d.parameters())
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(sorted, vec!["DEPTH", "WIDTH"]);
    }

    #[test]
    fn all_statements_cover_processes_tasks_and_functions() {
        let mut d = Design::new();
        let line = d.line("t.v", 1);
        d.add_process(ProcessKind::Initial, line, Stmt::seq(vec![Stmt::empty_block()]));
        d.add_task("t", Vec::new(), Stmt::empty_block());
        d.add_function("f", Vec::new(), None);
        assert_eq!(d.all_statements().len(), 3);
    }

    #[test]
    fn pin_total_counts_all_objects() {
        let mut d = Design::new();
        d.add_signal("a", SignalKind::Wire, 3);
        d.add_node("n", NodeKind::Bufz, 2);
        assert_eq!(d.pin_total(), 5);
        assert_eq!(d.object_count(), 2);
    }
}
