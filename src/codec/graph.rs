/// The graph object and its codec declaration

use serde::{Deserialize, Serialize};

use super::{CodecRegistry, FieldName, ObjectCodec, Persistable};
use crate::image::Image;
use crate::shape::{ActorShape, Point, Rect, ShapeKind};
use crate::Result;

/// Scale and translation of the rendered graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub scale: f64,
    pub translate: Point,
}

impl Default for GraphView {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Point::default(),
        }
    }
}

/// Resolves style shape names to the shapes this graph can draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRenderer {
    pub shapes: Vec<ShapeKind>,
}

impl CellRenderer {
    pub fn shape(&self, name: &str) -> Option<&'static dyn ActorShape> {
        ShapeKind::from_name(name)
            .filter(|kind| self.shapes.contains(kind))
            .map(ShapeKind::shape)
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self {
            shapes: ShapeKind::ALL.to_vec(),
        }
    }
}

/// A diagram graph: persistent settings plus the runtime collaborators that
/// are attached to a live instance.
///
/// Runtime collaborators are represented by handles (listener ids, container
/// and editor ids, selected cell ids) so that every field has a value the
/// codec can see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Graph {
    pub grid_size: f64,
    pub grid_enabled: bool,
    pub tolerance: f64,
    pub multigraph: bool,
    pub allow_loops: bool,
    pub allow_dangling_edges: bool,
    pub cells_locked: bool,
    pub enabled: bool,
    pub html_labels: bool,
    pub default_overlap: f64,
    pub border: f64,
    pub minimum_graph_size: Option<Rect>,
    pub background_image: Option<Image>,

    pub graph_listeners: Vec<String>,
    pub event_listeners: Vec<String>,
    pub view: GraphView,
    pub container: Option<String>,
    pub cell_renderer: CellRenderer,
    pub editor: Option<String>,
    pub selection: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            grid_size: 10.0,
            grid_enabled: true,
            tolerance: 4.0,
            multigraph: true,
            allow_loops: false,
            allow_dangling_edges: true,
            cells_locked: false,
            enabled: true,
            html_labels: false,
            default_overlap: 0.5,
            border: 0.0,
            minimum_graph_size: None,
            background_image: None,
            graph_listeners: Vec::new(),
            event_listeners: Vec::new(),
            view: GraphView::default(),
            container: None,
            cell_renderer: CellRenderer::default(),
            editor: None,
            selection: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphField {
    GridSize,
    GridEnabled,
    Tolerance,
    Multigraph,
    AllowLoops,
    AllowDanglingEdges,
    CellsLocked,
    Enabled,
    HtmlLabels,
    DefaultOverlap,
    Border,
    MinimumGraphSize,
    BackgroundImage,
    GraphListeners,
    EventListeners,
    View,
    Container,
    CellRenderer,
    Editor,
    Selection,
}

impl GraphField {
    pub const ALL: [GraphField; 20] = [
        GraphField::GridSize,
        GraphField::GridEnabled,
        GraphField::Tolerance,
        GraphField::Multigraph,
        GraphField::AllowLoops,
        GraphField::AllowDanglingEdges,
        GraphField::CellsLocked,
        GraphField::Enabled,
        GraphField::HtmlLabels,
        GraphField::DefaultOverlap,
        GraphField::Border,
        GraphField::MinimumGraphSize,
        GraphField::BackgroundImage,
        GraphField::GraphListeners,
        GraphField::EventListeners,
        GraphField::View,
        GraphField::Container,
        GraphField::CellRenderer,
        GraphField::Editor,
        GraphField::Selection,
    ];

    /// Runtime-only fields, in the order the graph codec declares them
    pub const TRANSIENT: [GraphField; 7] = [
        GraphField::GraphListeners,
        GraphField::EventListeners,
        GraphField::View,
        GraphField::Container,
        GraphField::CellRenderer,
        GraphField::Editor,
        GraphField::Selection,
    ];
}

impl FieldName for GraphField {
    fn name(self) -> &'static str {
        match self {
            GraphField::GridSize => "gridSize",
            GraphField::GridEnabled => "gridEnabled",
            GraphField::Tolerance => "tolerance",
            GraphField::Multigraph => "multigraph",
            GraphField::AllowLoops => "allowLoops",
            GraphField::AllowDanglingEdges => "allowDanglingEdges",
            GraphField::CellsLocked => "cellsLocked",
            GraphField::Enabled => "enabled",
            GraphField::HtmlLabels => "htmlLabels",
            GraphField::DefaultOverlap => "defaultOverlap",
            GraphField::Border => "border",
            GraphField::MinimumGraphSize => "minimumGraphSize",
            GraphField::BackgroundImage => "backgroundImage",
            GraphField::GraphListeners => "graphListeners",
            GraphField::EventListeners => "eventListeners",
            GraphField::View => "view",
            GraphField::Container => "container",
            GraphField::CellRenderer => "cellRenderer",
            GraphField::Editor => "editor",
            GraphField::Selection => "selection",
        }
    }
}

impl Persistable for Graph {
    const TYPE_NAME: &'static str = "Graph";
    type Field = GraphField;
}

/// Codec for [`Graph`] that leaves out the runtime collaborators
pub fn graph_codec() -> Result<ObjectCodec> {
    ObjectCodec::from_template(&Graph::new(), &GraphField::TRANSIENT)
}

/// Install the graph codec, replacing any earlier graph registration
pub fn register_graph_codec(registry: &mut CodecRegistry) -> Result<()> {
    registry.register(graph_codec()?);
    Ok(())
}
