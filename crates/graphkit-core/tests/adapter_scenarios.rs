//! End-to-end scenarios combining backends, traversals and adapters through
//! the public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use graphkit_core::{
    traverse, AdjacencyList, AdjacencyMatrix, Broadcast, Chain, EdgeMutation, Error, FixedMatrix,
    Graph, PairDispatch, Tagged, TraversalKind, TraversalMut, VertexMutation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Circle,
    Square,
}

#[derive(Debug)]
struct Body {
    shape: Shape,
    size: u32,
}

impl Tagged for Body {
    type Tag = Shape;

    fn type_tag(&self) -> Shape {
        self.shape
    }
}

type Collide = fn(&Body, &Body) -> u32;

#[test]
fn collision_table_on_fixed_matrix() {
    let mut table: FixedMatrix<Shape, Collide, 2> =
        FixedMatrix::from_vertices([Shape::Circle, Shape::Square]);
    table
        .upsert_edge(0, 0, |a, b| a.size + b.size)
        .unwrap();
    table
        .upsert_edge(0, 1, |a, b| a.size * b.size)
        .unwrap();

    let dispatch = PairDispatch::new(&table);
    let circle = Body { shape: Shape::Circle, size: 3 };
    let square = Body { shape: Shape::Square, size: 4 };

    assert_eq!(dispatch.invoke(&circle, &circle).unwrap(), 6);
    assert_eq!(dispatch.invoke(&circle, &square).unwrap(), 12);
    assert!(matches!(
        dispatch.invoke(&square, &circle),
        Err(Error::NoOverload { .. })
    ));

    // Registering the reverse pair later makes it dispatchable.
    table.upsert_edge(1, 0, |a, b| a.size - b.size).unwrap();
    let dispatch = PairDispatch::new(&table);
    assert_eq!(dispatch.invoke(&square, &circle).unwrap(), 1);
}

#[test]
fn composite_grows_and_shrinks() {
    let total = Rc::new(Cell::new(0_u32));
    let widget = |weight: u32| {
        let total = Rc::clone(&total);
        Box::new(move |value: u32| total.set(total.get() + value * weight)) as Box<dyn Fn(u32)>
    };

    let mut tree: AdjacencyList<Box<dyn Fn(u32)>, ()> = AdjacencyList::with_capacity(4);
    tree.push_vertex(widget(1)).unwrap();
    tree.push_vertex(widget(10)).unwrap();
    tree.push_vertex(widget(100)).unwrap();
    tree.upsert_edge(0, 1, ()).unwrap();
    tree.upsert_edge(1, 2, ()).unwrap();

    assert_eq!(Broadcast::new(&tree, 0).unwrap().invoke(1).unwrap(), 3);
    assert_eq!(total.get(), 111);

    // Dropping the middle widget detaches its child from the root.
    tree.remove_vertex(1).unwrap();
    total.set(0);
    assert_eq!(Broadcast::new(&tree, 0).unwrap().invoke(1).unwrap(), 1);
    assert_eq!(total.get(), 1);

    // Inserting a new middle widget shifts the old child to index 2.
    tree.insert_vertex(1, widget(1000)).unwrap();
    tree.upsert_edge(0, 1, ()).unwrap();
    tree.upsert_edge(1, 2, ()).unwrap();
    total.set(0);
    assert_eq!(Broadcast::new(&tree, 0).unwrap().invoke(2).unwrap(), 3);
    assert_eq!(total.get(), 2 + 2000 + 200);
}

#[test]
fn chain_of_escalation_levels() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let level = |name: &'static str, limit: u32| {
        let seen = Rc::clone(&seen);
        Box::new(move |amount: u32| {
            seen.borrow_mut().push(name);
            amount <= limit
        }) as Box<dyn Fn(u32) -> bool>
    };

    let mut chain: AdjacencyMatrix<Box<dyn Fn(u32) -> bool>, ()> = AdjacencyMatrix::new();
    chain.push_vertex(level("clerk", 100)).unwrap();
    chain.push_vertex(level("manager", 1_000)).unwrap();
    chain.push_vertex(level("director", 10_000)).unwrap();
    chain.upsert_edge(0, 1, ()).unwrap();
    chain.upsert_edge(1, 2, ()).unwrap();

    let approvals = Chain::new(&chain, 0).unwrap();
    assert_eq!(approvals.invoke(500).unwrap(), Some(1));
    assert_eq!(*seen.borrow(), ["clerk", "manager"]);

    seen.borrow_mut().clear();
    assert_eq!(approvals.invoke(50_000).unwrap(), None);
    assert_eq!(*seen.borrow(), ["clerk", "manager", "director"]);
}

#[test]
fn traversal_kind_selected_at_runtime() {
    let mut graph: AdjacencyList<String, u8> = ["root", "left", "right", "leaf"]
        .into_iter()
        .map(String::from)
        .collect();
    graph.upsert_edge(0, 1, 1).unwrap();
    graph.upsert_edge(0, 2, 2).unwrap();
    graph.upsert_edge(1, 3, 3).unwrap();
    *graph.edge_mut(0, 2).unwrap() = 20;
    assert_eq!(*graph.edge(0, 2).unwrap(), 20);

    let orders: Vec<Vec<usize>> = TraversalKind::ALL
        .into_iter()
        .map(|kind| traverse(&graph, kind, 0).unwrap().into_indices())
        .collect();
    assert_eq!(
        orders,
        [vec![0, 1, 2, 3], vec![0, 2, 1, 3], vec![0, 1, 2, 3], vec![0, 1, 3]]
    );

    let mut walk = TraversalMut::new(&mut graph, TraversalKind::BreadthFirst, 1).unwrap();
    walk.for_each_mut(|_, name| *name = name.to_uppercase())
        .unwrap();
    assert_eq!(graph.vertex(1).unwrap(), "LEFT");
    assert_eq!(graph.vertex(3).unwrap(), "LEAF");
    assert_eq!(graph.vertex(0).unwrap(), "root");
}
