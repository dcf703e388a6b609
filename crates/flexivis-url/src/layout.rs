//! Structured layouts and their compilation to Flexivis layout text.
//!
//! A [`LayoutNode`] tree mixes views, bare view names, joins and scaled
//! sublayouts. Compiling it yields the layout text understood by the
//! service (see <https://flexivis.infrastruktur.link/#layout>) plus the views
//! the tree embeds, in depth-first order.
//!
//! The layout grammar has three levels of binding: atoms (names and
//! parenthesized groups), scaled atoms (`a30`) and joins (`a/b`, `a-b`).
//! Children are parenthesized only when their own level would otherwise
//! bind looser than the position they are placed in.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::view::{View, ViewName};

/// How a join arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Children rendered next to each other, separated by `/`.
    SideBySide,
    /// Children rendered on top of one another, separated by `-`.
    VerticalStack,
}

impl JoinKind {
    pub fn separator(self) -> char {
        match self {
            Self::SideBySide => '/',
            Self::VerticalStack => '-',
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SideBySide => "side-by-side",
            Self::VerticalStack => "vertical stack",
        })
    }
}

/// Children of a join. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Children(Vec<LayoutNode>);

impl Children {
    /// Collect join children, rejecting an empty list.
    pub fn new(kind: JoinKind, children: impl IntoIterator<Item = LayoutNode>) -> Result<Self> {
        let children: Vec<LayoutNode> = children.into_iter().collect();
        if children.is_empty() {
            return Err(Error::EmptyJoin { kind });
        }
        Ok(Self(children))
    }

    pub fn as_slice(&self) -> &[LayoutNode] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A node of a structured layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutNode {
    /// A view; contributes its name to the layout and itself to the URL.
    View(View),
    /// A reference to a view by name only, without view metadata.
    Name(ViewName),
    /// Children rendered side by side.
    SideBySide(Children),
    /// Children stacked vertically.
    VerticalStack(Children),
    /// A sublayout occupying a percentage of its parent's space.
    Scaled {
        inner: Box<LayoutNode>,
        percentage: u8,
    },
}

impl LayoutNode {
    /// Lay out `children` next to each other. Fails on an empty list.
    pub fn side_by_side<I>(children: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<LayoutNode>,
    {
        let children = Children::new(JoinKind::SideBySide, children.into_iter().map(Into::into))?;
        Ok(Self::SideBySide(children))
    }

    /// Stack `children` vertically. Fails on an empty list.
    pub fn vertical_stack<I>(children: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<LayoutNode>,
    {
        let children =
            Children::new(JoinKind::VerticalStack, children.into_iter().map(Into::into))?;
        Ok(Self::VerticalStack(children))
    }

    /// Wrap this layout so it occupies `percentage` of the space available in
    /// its parent join.
    pub fn occupying_percentage(self, percentage: u8) -> Self {
        Self::Scaled {
            inner: Box::new(self),
            percentage,
        }
    }

    /// Compile to layout text and the embedded views.
    pub fn compile(&self) -> CompiledLayout<'_> {
        let (text, _, views) = compile(self);
        CompiledLayout { text, views }
    }
}

impl From<View> for LayoutNode {
    fn from(view: View) -> Self {
        Self::View(view)
    }
}

impl From<ViewName> for LayoutNode {
    fn from(name: ViewName) -> Self {
        Self::Name(name)
    }
}

/// Result of compiling a [`LayoutNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledLayout<'a> {
    /// Layout text, e.g. `(a30-b)/c`.
    pub text: String,
    /// Views embedded in the tree, depth-first in child order.
    pub views: Vec<&'a View>,
}

/// How loosely the outermost construct of a layout text binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Atomic,
    Scaled,
    Joined,
}

fn compile(node: &LayoutNode) -> (String, Precedence, Vec<&View>) {
    match node {
        LayoutNode::View(view) => (view.name.to_string(), Precedence::Atomic, vec![view]),
        LayoutNode::Name(name) => (name.to_string(), Precedence::Atomic, Vec::new()),
        LayoutNode::Scaled { inner, percentage } => {
            let (text, views) = compile_at_most(Precedence::Atomic, inner);
            (format!("{text}{percentage}"), Precedence::Scaled, views)
        }
        LayoutNode::SideBySide(children) => join(JoinKind::SideBySide, children),
        LayoutNode::VerticalStack(children) => join(JoinKind::VerticalStack, children),
    }
}

fn join(kind: JoinKind, children: &Children) -> (String, Precedence, Vec<&View>) {
    if let [only] = children.as_slice() {
        return compile(only);
    }
    let mut text = String::new();
    let mut views = Vec::new();
    for (i, child) in children.as_slice().iter().enumerate() {
        if i != 0 {
            text.push(kind.separator());
        }
        let (child_text, child_views) = compile_at_most(Precedence::Scaled, child);
        text.push_str(&child_text);
        views.extend(child_views);
    }
    trace!(%kind, children = children.len(), layout = %text, "joined sublayouts");
    (text, Precedence::Joined, views)
}

/// Compile `node`, parenthesizing it when it binds looser than `max`.
fn compile_at_most(max: Precedence, node: &LayoutNode) -> (String, Vec<&View>) {
    let (text, precedence, views) = compile(node);
    if precedence <= max {
        (text, views)
    } else {
        (format!("({text})"), views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn name(n: &str) -> LayoutNode {
        LayoutNode::Name(ViewName::from(n))
    }

    fn text_of(node: &LayoutNode) -> String {
        node.compile().text
    }

    #[test]
    fn view_leaf_is_atomic_and_embeds_itself() {
        let view = View::text("a", "https://example.com/a.txt");
        let node = LayoutNode::from(view.clone());
        let compiled = node.compile();
        assert_eq!(compiled.text, "a");
        assert_eq!(compiled.views, vec![&view]);
    }

    #[test]
    fn name_leaf_embeds_nothing() {
        let node = name("a");
        let compiled = node.compile();
        assert_eq!(compiled.text, "a");
        assert!(compiled.views.is_empty());
    }

    #[test]
    fn single_child_join_is_transparent() {
        let child = name("a").occupying_percentage(30);
        let joined = LayoutNode::side_by_side([child.clone()]).unwrap();
        assert_eq!(text_of(&joined), text_of(&child));
        assert_eq!(text_of(&joined), "a30");

        let pair = LayoutNode::side_by_side([name("a"), name("b")]).unwrap();
        let nested = LayoutNode::vertical_stack([pair]).unwrap();
        assert_eq!(text_of(&nested), "a/b");
    }

    #[test]
    fn single_child_join_keeps_child_precedence() {
        // The single-child stack is still a join for its parent scale.
        let pair = LayoutNode::side_by_side([name("a"), name("b")]).unwrap();
        let inner = LayoutNode::vertical_stack([pair]).unwrap();
        assert_eq!(text_of(&inner.occupying_percentage(40)), "(a/b)40");
    }

    #[test]
    fn join_inside_scale_is_parenthesized() {
        let node = LayoutNode::side_by_side([name("A"), name("B")])
            .unwrap()
            .occupying_percentage(30);
        assert_eq!(text_of(&node), "(A/B)30");
    }

    #[test]
    fn scale_inside_scale_is_parenthesized() {
        let node = name("a").occupying_percentage(30).occupying_percentage(50);
        assert_eq!(text_of(&node), "(a30)50");
    }

    #[test]
    fn nested_joins_are_parenthesized() {
        let same = LayoutNode::side_by_side([
            LayoutNode::side_by_side([name("A"), name("B")]).unwrap(),
            name("C"),
        ])
        .unwrap();
        assert_eq!(text_of(&same), "(A/B)/C");

        let mixed = LayoutNode::side_by_side([
            LayoutNode::vertical_stack([name("a"), name("b")]).unwrap(),
            name("c"),
        ])
        .unwrap();
        assert_eq!(text_of(&mixed), "(a-b)/c");
    }

    #[test]
    fn atomic_and_scaled_children_of_joins_are_bare() {
        let node = LayoutNode::side_by_side([name("A").occupying_percentage(30), name("B")])
            .unwrap();
        assert_eq!(text_of(&node), "A30/B");
    }

    #[test]
    fn percentage_digits_follow_directly() {
        assert_eq!(text_of(&name("a").occupying_percentage(0)), "a0");
        assert_eq!(text_of(&name("a").occupying_percentage(100)), "a100");
        assert_eq!(text_of(&name("a").occupying_percentage(255)), "a255");
    }

    #[test]
    fn views_are_flattened_in_child_order() {
        let a = View::text("a", "1");
        let b = View::text("b", "2");
        let c = View::text("c", "3");
        let node = LayoutNode::side_by_side([
            LayoutNode::vertical_stack([a.clone().occupying_percentage(30), name("x")]).unwrap(),
            LayoutNode::vertical_stack([b.clone(), c.clone()]).unwrap(),
        ])
        .unwrap();
        let compiled = node.compile();
        assert_eq!(compiled.text, "(a30-x)/(b-c)");
        let names: Vec<&str> = compiled.views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn empty_joins_are_rejected() {
        let err = LayoutNode::side_by_side(Vec::<LayoutNode>::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyJoin {
                kind: JoinKind::SideBySide
            }
        );
        let err = LayoutNode::vertical_stack(Vec::<View>::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyJoin {
                kind: JoinKind::VerticalStack
            }
        );
        assert_eq!(
            err.to_string(),
            "vertical stack layout needs at least 1 child but got 0"
        );
    }

    #[test]
    fn joins_accept_views_directly() {
        let node = LayoutNode::vertical_stack([View::json("a", "1"), View::map("b", "2")]).unwrap();
        assert_eq!(text_of(&node), "a-b");
        assert_eq!(node.compile().views.len(), 2);
    }

    #[test]
    fn precedence_ordering() {
        assert!(Precedence::Atomic < Precedence::Scaled);
        assert!(Precedence::Scaled < Precedence::Joined);
    }

    fn arb_layout() -> impl Strategy<Value = LayoutNode> {
        let leaf = prop_oneof![
            "[a-z]{1,3}".prop_map(|n| name(&n)),
            "[a-z]{1,3}".prop_map(|n| LayoutNode::from(View::text(n.as_str(), "x"))),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                (inner.clone(), any::<u8>()).prop_map(|(node, pct)| node.occupying_percentage(pct)),
                prop::collection::vec(inner.clone(), 1..4)
                    .prop_map(|children| LayoutNode::side_by_side(children).unwrap()),
                prop::collection::vec(inner, 1..4)
                    .prop_map(|children| LayoutNode::vertical_stack(children).unwrap()),
            ]
        })
    }

    proptest! {
        #[test]
        fn single_child_join_compiles_like_its_child(node in arb_layout()) {
            let expected = node.compile();
            let beside = LayoutNode::side_by_side([node.clone()]).unwrap();
            let stacked = LayoutNode::vertical_stack([node.clone()]).unwrap();
            prop_assert_eq!(beside.compile(), expected.clone());
            prop_assert_eq!(stacked.compile(), expected);
        }

        #[test]
        fn parentheses_are_balanced(node in arb_layout()) {
            let mut depth = 0i32;
            for c in node.compile().text.chars() {
                match c {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                prop_assert!(depth >= 0);
            }
            prop_assert_eq!(depth, 0);
        }
    }
}
