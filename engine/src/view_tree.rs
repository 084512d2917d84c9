use serde::{Deserialize, Serialize};

use crate::graphics::Color;
use crate::ui::Rect;

/// Declarative description of the interactive overlay for one frame.
///
/// Games rebuild it from state every tick; the engine draws it and routes clicks through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewTree<A> {
    pub nodes: Vec<ViewNode<A>>,
}

impl<A> Default for ViewTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ViewTree<A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, node: ViewNode<A>) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonNode<A>> {
        self.nodes.iter().filter_map(|node| match node {
            ViewNode::Button(button) => Some(button),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewNode<A> {
    Button(ButtonNode<A>),
    Text(TextNode),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonNode<A> {
    pub id: u32,
    pub rect: Rect,
    pub label: String,
    pub action: A,
    pub enabled: bool,
    pub fill: Color,
    pub label_color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextNode {
    /// Top-center of the first line; text is centered horizontally on it.
    pub pos: (u32, u32),
    pub text: String,
    pub scale: u32,
    pub color: Color,
}

/// Action of the topmost enabled button under `pos`, if any.
pub fn hit_test<A: Clone>(view: &ViewTree<A>, pos: (u32, u32)) -> Option<A> {
    let (mx, my) = pos;
    view.nodes.iter().rev().find_map(|node| match node {
        ViewNode::Button(button) if button.enabled && button.rect.contains(mx, my) => {
            Some(button.action.clone())
        }
        _ => None,
    })
}
