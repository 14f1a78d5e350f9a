//! Demonstration scenarios for graphkit.
//!
//! Each scenario builds a small graph, drives it through a traversal or an
//! adapter and returns the lines the `graphkit` binary prints, so the output
//! can be asserted on without capturing stdout.

#![warn(missing_docs)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use clap::ValueEnum;
use graphkit_core::{
    traverse, AdjacencyList, AdjacencyMatrix, BackendKind, Broadcast, Chain, EdgeMutation, Error,
    FixedMatrix, GraphkitConfig, PairDispatch, Result, Tagged, TraversalKind, VertexMutation,
};


/// Scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scenario {
    /// Every scenario in turn.
    #[default]
    All,
    /// Search orders over the alphabet graph.
    Search,
    /// Cat/Dog pair dispatch.
    Dispatch,
    /// Three-component composite broadcast.
    Broadcast,
    /// Three-handler responsibility chain.
    Chain,
}

impl Scenario {
    /// The individual scenarios, in the order `All` runs them.
    pub const EACH: [Scenario; 4] = [
        Scenario::Search,
        Scenario::Dispatch,
        Scenario::Broadcast,
        Scenario::Chain,
    ];

    /// Name accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Search => "search",
            Self::Dispatch => "dispatch",
            Self::Broadcast => "broadcast",
            Self::Chain => "chain",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs shared by the scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOptions {
    /// Backend for the dynamically sized graphs.
    pub backend: BackendKind,
    /// Vertex capacity reserved for dynamic graphs.
    pub capacity: usize,
    /// Order used by the search scenario.
    pub order: TraversalKind,
    /// Start vertex for the search scenario.
    pub start: usize,
    /// Value passed down the chain.
    pub chain_probe: i64,
    /// Value broadcast to the composite.
    pub broadcast_value: i64,
}

impl ScenarioOptions {
    /// Options taken from a loaded configuration, with the stock probe values.
    #[must_use]
    pub fn from_config(config: &GraphkitConfig) -> Self {
        Self {
            backend: config.storage.backend,
            capacity: config.storage.initial_capacity,
            order: config.traversal.default_order,
            start: config.traversal.start,
            chain_probe: 4,
            broadcast_value: 5,
        }
    }
}

impl Default for ScenarioOptions {
    fn default() -> Self {
        Self::from_config(&GraphkitConfig::default())
    }
}

/// Runs `scenario`, returning its output lines.
///
/// Each scenario's output is preceded by a `== name ==` header.
pub fn run(scenario: Scenario, options: &ScenarioOptions) -> Result<Vec<String>> {
    let selected: &[Scenario] = match scenario {
        Scenario::All => &Scenario::EACH,
        Scenario::Search => &[Scenario::Search],
        Scenario::Dispatch => &[Scenario::Dispatch],
        Scenario::Broadcast => &[Scenario::Broadcast],
        Scenario::Chain => &[Scenario::Chain],
    };

    let mut lines = Vec::new();
    for &each in selected {
        tracing::info!(scenario = %each, backend = %options.backend, "running scenario");
        lines.push(format!("== {each} =="));
        lines.extend(match each {
            Scenario::Search => search(options)?,
            Scenario::Dispatch => dispatch(options)?,
            Scenario::Broadcast => broadcast(options.broadcast_value)?,
            Scenario::Chain => chain(options)?,
            Scenario::All => Vec::new(),
        });
    }
    Ok(lines)
}

// ── Search ─────────────────────────────────────────────────────────

const ALPHABET: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];
const ALPHABET_EDGES: [(usize, usize); 4] = [(0, 1), (1, 2), (0, 3), (3, 4)];

/// Lists the alphabet graph's vertices in the configured order.
pub fn search(options: &ScenarioOptions) -> Result<Vec<String>> {
    match options.backend {
        BackendKind::Matrix => search_on(AdjacencyMatrix::with_capacity(options.capacity), options),
        BackendKind::List => search_on(AdjacencyList::with_capacity(options.capacity), options),
    }
}

fn search_on<G>(mut graph: G, options: &ScenarioOptions) -> Result<Vec<String>>
where
    G: VertexMutation<Vertex = String> + EdgeMutation<Edge = ()>,
{
    for name in ALPHABET {
        graph.push_vertex(name.to_string())?;
    }
    for (from, to) in ALPHABET_EDGES {
        graph.upsert_edge(from, to, ())?;
    }

    let order = traverse(&graph, options.order, options.start)?;
    tracing::debug!(order = %options.order, start = options.start, visited = order.len(), "search complete");
    Ok(order.iter().cloned().collect())
}

// ── Dispatch ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Species {
    Cat,
    Dog,
}

#[derive(Debug, Clone, Copy)]
struct Animal {
    species: Species,
}

impl Animal {
    const CAT: Animal = Animal {
        species: Species::Cat,
    };
    const DOG: Animal = Animal {
        species: Species::Dog,
    };
}

impl Tagged for Animal {
    type Tag = Species;

    fn type_tag(&self) -> Species {
        self.species
    }
}

type Greeting = Box<dyn Fn(&Animal, &Animal) -> String>;

/// Greets Cat/Dog pairs through a dispatch table, including the unregistered
/// (Cat, Cat) pair whose error message is reported as a line.
pub fn dispatch(options: &ScenarioOptions) -> Result<Vec<String>> {
    match options.backend {
        BackendKind::Matrix => dispatch_on(AdjacencyMatrix::new()),
        BackendKind::List => dispatch_on(AdjacencyList::new()),
    }
}

fn dispatch_on<G>(mut table: G) -> Result<Vec<String>>
where
    G: VertexMutation<Vertex = Species> + EdgeMutation<Edge = Greeting>,
{
    let cat = table.push_vertex(Species::Cat)?;
    let dog = table.push_vertex(Species::Dog)?;
    table.upsert_edge(cat, dog, Box::new(|_: &Animal, _: &Animal| "Meow! Bark!".to_string()))?;
    table.upsert_edge(dog, cat, Box::new(|_: &Animal, _: &Animal| "Bark! Meow!".to_string()))?;

    let greeter = PairDispatch::new(&table);
    let meetings = [
        (Animal::CAT, Animal::DOG),
        (Animal::DOG, Animal::CAT),
        (Animal::CAT, Animal::CAT),
    ];

    let mut lines = Vec::with_capacity(meetings.len());
    for (first, second) in &meetings {
        match greeter.invoke(first, second) {
            Ok(line) => lines.push(line),
            Err(err @ Error::NoOverload { .. }) => {
                tracing::warn!(error = %err, "dispatch failed");
                lines.push(err.to_string());
            }
            Err(err) => return Err(err),
        }
    }
    Ok(lines)
}

// ── Broadcast ──────────────────────────────────────────────────────

type Component = Box<dyn Fn(i64)>;

/// Broadcasts `value` to a three-component composite rooted at vertex 0.
pub fn broadcast(value: i64) -> Result<Vec<String>> {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let component = |render: fn(i64) -> String| -> Component {
        let lines = Rc::clone(&lines);
        Box::new(move |value: i64| lines.borrow_mut().push(render(value)))
    };

    let mut composite: FixedMatrix<Component, (), 3> = FixedMatrix::from_vertices([
        component(|_| "Quack!".to_string()),
        component(|value| format!("Grok {value}")),
        component(|value| format!("Mrok {value}")),
    ]);
    composite.upsert_edge(0, 1, ())?;
    composite.upsert_edge(0, 2, ())?;

    Broadcast::new(&composite, 0)?.invoke(value)?;
    Ok(lines.take())
}

// ── Chain ──────────────────────────────────────────────────────────

type Handler = Box<dyn Fn(i64) -> bool>;

/// Offers the configured probe to a chain of handlers accepting 5, 4 and 3.
pub fn chain(options: &ScenarioOptions) -> Result<Vec<String>> {
    match options.backend {
        BackendKind::Matrix => chain_on(AdjacencyMatrix::new(), options.chain_probe),
        BackendKind::List => chain_on(AdjacencyList::new(), options.chain_probe),
    }
}

fn chain_on<G>(mut graph: G, probe: i64) -> Result<Vec<String>>
where
    G: VertexMutation<Vertex = Handler> + EdgeMutation<Edge = ()>,
{
    let lines = Rc::new(RefCell::new(Vec::new()));
    for accepts in [5, 4, 3] {
        let lines = Rc::clone(&lines);
        graph.push_vertex(Box::new(move |value: i64| {
            if value != accepts {
                return false;
            }
            lines.borrow_mut().push(format!("Found it! {accepts}!"));
            true
        }))?;
    }
    graph.upsert_edge(0, 1, ())?;
    graph.upsert_edge(1, 2, ())?;

    if Chain::new(&graph, 0)?.invoke(probe)?.is_none() {
        lines.borrow_mut().push(format!("No handler accepted {probe}"));
    }
    Ok(lines.take())
}
