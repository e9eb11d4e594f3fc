//! # Document: Headless Element Tree
//!
//! An arena-backed stand-in for the browser document. It supports exactly
//! what the page needs: id and class lookup, class toggling, containment,
//! inline styles, a minimal layout box per element, and mounting
//! [`Fragment`]s produced by the renderers.
//!
//! Removing an element (directly, or by clearing its parent) frees its whole
//! subtree. Freed slots are reused by later elements under a new generation,
//! so an id kept past removal goes stale: queries on it see nothing and
//! mutations through it are ignored. Moving an element with
//! [`Document::append_child`] is not a removal.

use folio_core::fragment::{ElementNode, Fragment, Node};
use folio_core::render::MountMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum Child {
    Element(ElementId),
    Text(String),
}

/// Offset from the top of the page and rendered height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Child>,
    parent: Option<ElementId>,
    pub layout: Layout,
    pub scroll_top: f64,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
            parent: None,
            layout: Layout::default(),
            scroll_top: 0.0,
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: ElementId,
    head: ElementId,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let root = ElementId {
            index: 0,
            generation: 0,
        };
        let mut doc = Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("html")),
            }],
            free: Vec::new(),
            root,
            head: root,
            body: root,
        };
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn head(&self) -> ElementId {
        self.head
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// The element behind `id`, or `None` once it has been removed.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    pub fn is_live(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Number of arena slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements not yet removed, connected or not.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let element = Some(Element::new(tag));
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.element = element;
                ElementId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element,
                });
                ElementId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------

    /// Appends `child` to `parent`, moving it if it already has a parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if !self.is_live(parent) || !self.is_live(child) || self.contains(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.push(Child::Element(child));
        }
    }

    pub fn append_text(&mut self, parent: ElementId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(parent) {
            el.children.push(Child::Text(text.into()));
        }
    }

    /// Detaches `id` from its parent and frees its subtree.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.root || !self.is_live(id) {
            return;
        }
        self.detach(id);
        self.free_subtree(id);
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.element_mut(id).and_then(|el| el.parent.take());
        if let Some(parent) = parent.and_then(|p| self.element_mut(p)) {
            parent.children.retain(|c| *c != Child::Element(id));
        }
    }

    fn free_subtree(&mut self, id: ElementId) {
        let Some(slot) = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
        else {
            return;
        };
        let Some(element) = slot.element.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);

        for child in element.children {
            if let Child::Element(inner) = child {
                self.free_subtree(inner);
            }
        }
    }

    /// Removes every child of `id`, freeing element subtrees.
    pub fn clear_children(&mut self, id: ElementId) {
        let children = match self.element_mut(id) {
            Some(el) => std::mem::take(&mut el.children),
            None => return,
        };
        for child in children {
            if let Child::Element(inner) = child {
                self.free_subtree(inner);
            }
        }
    }

    pub fn set_text_content(&mut self, id: ElementId, text: impl Into<String>) {
        self.clear_children(id);
        self.append_text(id, text);
    }

    /// Instantiates `fragment` under `container` and returns the ids of its
    /// top-level elements.
    pub fn mount(
        &mut self,
        container: ElementId,
        fragment: &Fragment,
        mode: MountMode,
    ) -> Vec<ElementId> {
        if !self.is_live(container) {
            return Vec::new();
        }
        if mode == MountMode::Replace {
            self.clear_children(container);
        }

        let mut mounted = Vec::new();
        for node in &fragment.nodes {
            match node {
                Node::Text(text) => self.append_text(container, text.as_str()),
                Node::Element(el) => {
                    let id = self.instantiate(el);
                    self.append_child(container, id);
                    mounted.push(id);
                }
            }
        }
        mounted
    }

    /// Builds a detached element tree from `node`.
    pub fn instantiate(&mut self, node: &ElementNode) -> ElementId {
        let id = self.create_element(&node.tag);
        if let Some(el) = self.element_mut(id) {
            el.classes = node.classes.clone();
            el.attrs = node.attrs.clone();
            el.styles = node.styles.clone();
        }
        for child in &node.children {
            match child {
                Node::Text(text) => self.append_text(id, text.as_str()),
                Node::Element(inner) => {
                    let child_id = self.instantiate(inner);
                    self.append_child(id, child_id);
                }
            }
        }
        id
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).and_then(|el| el.parent)
    }

    /// Element children of `id`, in order.
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.element(id)
            .map(|el| {
                el.children
                    .iter()
                    .filter_map(|c| match c {
                        Child::Element(inner) => Some(*inner),
                        Child::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `id` is reachable from the root.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.contains(self.root, id)
    }

    /// Inclusive containment, like `Node.contains`.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        if !self.is_live(node) {
            return false;
        }
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Connected elements in document order.
    pub fn all_elements(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.walk(self.root, &mut out);
        out
    }

    fn walk(&self, id: ElementId, out: &mut Vec<ElementId>) {
        out.push(id);
        for child in self.children(id) {
            self.walk(child, out);
        }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.all_elements()
            .into_iter()
            .find(|el| self.attr(*el, "id") == Some(id))
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<ElementId> {
        self.all_elements()
            .into_iter()
            .filter(|el| self.has_class(*el, class))
            .collect()
    }

    /// Nearest inclusive ancestor of `id` matching `predicate`.
    pub fn closest(&self, id: ElementId, predicate: impl Fn(&Element) -> bool) -> Option<ElementId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let el = self.element(current)?;
            if predicate(el) {
                return Some(current);
            }
            cursor = el.parent;
        }
        None
    }

    pub fn closest_with_class(&self, id: ElementId, class: &str) -> Option<ElementId> {
        self.closest(id, |el| el.classes.iter().any(|c| c == class))
    }

    pub fn text_content(&self, id: ElementId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: ElementId, out: &mut String) {
        let Some(el) = self.element(id) else {
            return;
        };
        for child in &el.children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(inner) => self.collect_text(*inner, out),
            }
        }
    }

    // ------------------------------------------------------------------
    // Classes, attributes, styles
    // ------------------------------------------------------------------

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        let Some(el) = self.element_mut(id) else {
            return;
        };
        let value = value.into();
        match el.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) => *existing = value,
            None => el.attrs.push((name.to_string(), value)),
        }
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.style(property))
    }

    pub fn set_style(&mut self, id: ElementId, property: &str, value: impl Into<String>) {
        let Some(el) = self.element_mut(id) else {
            return;
        };
        let value = value.into();
        match el.styles.iter_mut().find(|(k, _)| k == property) {
            Some((_, existing)) => *existing = value,
            None => el.styles.push((property.to_string(), value)),
        }
    }

    // ------------------------------------------------------------------
    // Layout and scrolling
    // ------------------------------------------------------------------

    pub fn set_layout(&mut self, id: ElementId, top: f64, height: f64) {
        if let Some(el) = self.element_mut(id) {
            el.layout = Layout { top, height };
        }
    }

    pub fn layout(&self, id: ElementId) -> Layout {
        self.element(id).map(|el| el.layout).unwrap_or_default()
    }

    pub fn offset_top(&self, id: ElementId) -> f64 {
        self.layout(id).top
    }

    /// Total height of the element children of `id`.
    pub fn scroll_height(&self, id: ElementId) -> f64 {
        self.children(id)
            .iter()
            .map(|child| self.layout(*child).height)
            .sum()
    }

    pub fn scroll_top(&self, id: ElementId) -> f64 {
        self.element(id).map_or(0.0, |el| el.scroll_top)
    }

    pub fn set_scroll_top(&mut self, id: ElementId, top: f64) {
        if let Some(el) = self.element_mut(id) {
            el.scroll_top = top;
        }
    }

    pub fn scroll_to_end(&mut self, id: ElementId) {
        let end = self.scroll_height(id);
        self.set_scroll_top(id, end);
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Rebuilds a detached markup tree from the subtree at `id`. A removed
    /// element snapshots as an empty `template`.
    pub fn snapshot(&self, id: ElementId) -> ElementNode {
        let Some(el) = self.element(id) else {
            return ElementNode::new("template");
        };
        ElementNode {
            tag: el.tag.clone(),
            classes: el.classes.clone(),
            attrs: el.attrs.clone(),
            styles: el.styles.clone(),
            children: el
                .children
                .iter()
                .map(|child| match child {
                    Child::Text(text) => Node::Text(text.clone()),
                    Child::Element(inner) => Node::Element(self.snapshot(*inner)),
                })
                .collect(),
        }
    }

    pub fn outer_html(&self, id: ElementId) -> String {
        Fragment::from_iter([self.snapshot(id)]).to_html()
    }

    pub fn inner_html(&self, id: ElementId) -> String {
        let snapshot = self.snapshot(id);
        snapshot.children.into_iter().collect::<Fragment>().to_html()
    }
}
