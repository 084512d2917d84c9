use crate::graphics::{Renderer2d, text_height, text_width};
use crate::view_tree::{ButtonNode, TextNode, ViewNode, ViewTree};

/// Draws every node of `view` in order, so later nodes paint over earlier ones.
pub fn draw_view_tree<A>(renderer: &mut dyn Renderer2d, view: &ViewTree<A>) {
    for node in &view.nodes {
        match node {
            ViewNode::Text(text) => draw_text_node(renderer, text),
            ViewNode::Button(button) => draw_button(renderer, button),
        }
    }
}

fn draw_text_node(renderer: &mut dyn Renderer2d, node: &TextNode) {
    let (x, y) = node.pos;
    let x = x.saturating_sub(text_width(&node.text, node.scale) / 2);
    renderer.draw_text_scaled(x, y, &node.text, node.color, node.scale);
}

fn draw_button<A>(renderer: &mut dyn Renderer2d, button: &ButtonNode<A>) {
    renderer.fill_rect(button.rect, button.fill);
    if button.label.is_empty() {
        return;
    }

    let scale = 2;
    let (cx, cy) = button.rect.center();
    let x = cx.saturating_sub(text_width(&button.label, scale) / 2);
    let y = cy.saturating_sub(text_height(scale) / 2);
    renderer.draw_text_scaled(x, y, &button.label, button.label_color, scale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{BLACK, CpuRenderer, WHITE, rgb};
    use crate::surface::SurfaceSize;
    use crate::ui::Rect;

    #[test]
    fn button_fill_is_drawn_under_label() {
        let size = SurfaceSize::new(40, 20);
        let mut frame = vec![0u8; size.rgba_len()];
        let green = rgb(0, 128, 0);

        let mut tree = ViewTree::new();
        tree.push(ViewNode::Button(ButtonNode {
            id: 1,
            rect: Rect::new(0, 0, 40, 20),
            label: "OK".to_string(),
            action: (),
            enabled: true,
            fill: green,
            label_color: WHITE,
        }));

        let mut gfx = CpuRenderer::new(&mut frame, size);
        draw_view_tree(&mut gfx, &tree);

        assert_eq!(&frame[0..4], &green);
        assert!(frame.chunks_exact(4).any(|px| px == WHITE));
        assert!(frame.chunks_exact(4).all(|px| px != BLACK));
    }

    #[test]
    fn centered_text_straddles_anchor() {
        let size = SurfaceSize::new(60, 10);
        let mut frame = vec![0u8; size.rgba_len()];
        let mut tree: ViewTree<()> = ViewTree::new();
        tree.push(ViewNode::Text(TextNode {
            pos: (30, 0),
            text: "HI".to_string(),
            scale: 1,
            color: WHITE,
        }));

        let mut gfx = CpuRenderer::new(&mut frame, size);
        draw_view_tree(&mut gfx, &tree);

        // "HI" at scale 1 is 7px wide, so it starts 3px left of the anchor.
        let lit: Vec<u32> = (0..60)
            .filter(|&x| frame[(x * 4) as usize..(x * 4 + 4) as usize] == WHITE)
            .collect();
        assert_eq!(lit.first(), Some(&27));
        assert_eq!(lit.last(), Some(&33));
    }
}
