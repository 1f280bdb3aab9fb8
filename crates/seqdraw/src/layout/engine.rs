//! The two-pass sequence diagram layout engine.
//!
//! The first pass collects actors and actions from the statement list without
//! drawing anything. The second pass places actors in equal-width columns,
//! grows every lifeline by one step per action and draws each action as a
//! labeled arrow between its actors' lifelines.
//!
//! All drawing goes through a [`DrawingSurface`]; the engine keeps no state
//! between calls to [`Engine::render`].

use log::{debug, info, trace};

use seqdraw_core::{
    draw::{ArrowHead, DrawingSurface, FontFit, draw_arrow, fit_text},
    geometry::{Point, Size},
};
use seqdraw_parser::ast::{ActionDeclaration, Arrow, Statement};

use crate::{error::RenderError, layout::registry::ActorRegistry};

/// Horizontal placement of the actor columns.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Columns {
    width: f32,
    spacing: f32,
}

impl Columns {
    /// Left edge of the column at `position`.
    fn x(&self, position: usize) -> f32 {
        position as f32 * (self.width + self.spacing)
    }

    /// Horizontal center of the column at `index`.
    fn mid_x(&self, index: usize) -> f32 {
        self.x(index) + self.width / 2.0
    }
}

/// Lays out and draws a sequence diagram onto a [`DrawingSurface`].
///
/// Build one with [`EngineBuilder`].
#[derive(Debug, Clone)]
pub struct Engine {
    max_box_width: f32,
    box_height: f32,
    spacing: f32,
    vertical_spacing: f32,
    lifeline_increment: f32,
    label_padding: f32,
    label_gap: f32,
    font_fit: FontFit,
    arrow_head: ArrowHead,
}

impl Engine {
    /// Width of each actor column for `actor_count` actors.
    ///
    /// Columns share the available width equally after the gaps between them
    /// are taken out, up to the maximum box width. The result is never
    /// negative.
    pub fn column_width(&self, actor_count: usize, available_width: f32) -> f32 {
        if actor_count == 0 {
            return 0.0;
        }
        let count = actor_count as f32;
        let shared = (available_width - self.spacing * (count - 1.0)) / count;
        shared.min(self.max_box_width).max(0.0)
    }

    /// Horizontal offset that centers `actor_count` columns in the available width.
    pub fn centering_offset(&self, actor_count: usize, available_width: f32) -> f32 {
        if actor_count == 0 {
            return 0.0;
        }
        let count = actor_count as f32;
        let row_width =
            self.column_width(actor_count, available_width) * count + self.spacing * (count - 1.0);
        (available_width - row_width) / 2.0
    }

    /// Draw `statements` onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UndefinedActor`] as soon as an action names an
    /// actor that was never declared. Everything drawn up to that point stays
    /// on the surface and no arrow is drawn for the failing action.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        statements: &[Statement],
        surface: &mut S,
        available_width: f32,
    ) -> Result<(), RenderError> {
        info!(statements = statements.len(), available_width; "Rendering diagram");

        let (registry, actions) = Self::collect(statements);
        debug!(actors = registry.len(), actions = actions.len(); "Statements collected");

        let columns = Columns {
            width: self.column_width(registry.len(), available_width),
            spacing: self.spacing,
        };
        let origin = Point::new(self.centering_offset(registry.len(), available_width), 0.0);
        debug!(column_width = columns.width, origin_x = origin.x(); "Columns placed");

        if !registry.is_empty() {
            surface.translate_origin(origin);
            self.draw_actors(&registry, columns, surface);
        }

        self.draw_actions(&registry, &actions, columns, surface)?;

        if !registry.is_empty() {
            surface.translate_origin(origin.negate());
        }

        info!("Diagram rendered");
        Ok(())
    }

    /// Collection pass: register actors and gather actions in source order.
    fn collect(statements: &[Statement]) -> (ActorRegistry, Vec<&ActionDeclaration>) {
        let mut registry = ActorRegistry::new();
        let mut actions = Vec::new();

        for statement in statements {
            match statement {
                Statement::Actor(actor) => {
                    registry.register(&actor.name, &actor.value);
                }
                Statement::Action(action) => actions.push(action),
            }
        }

        (registry, actions)
    }

    fn draw_actors<S: DrawingSurface + ?Sized>(
        &self,
        registry: &ActorRegistry,
        columns: Columns,
        surface: &mut S,
    ) {
        let label_width = (columns.width - self.label_padding).max(0.0);

        for (position, (name, actor)) in registry.iter().enumerate() {
            let x = columns.x(position);
            surface.stroke_rect(Point::new(x, 0.0), Size::new(columns.width, self.box_height));

            let fitted = fit_text(surface, actor.label(), label_width, &self.font_fit);
            let text_x = x + (columns.width - fitted.width) / 2.0;
            surface.draw_text(
                actor.label(),
                Point::new(text_x, self.box_height / 2.0),
                label_width,
            );
            self.font_fit.restore(surface);

            trace!(actor = name, position, x, font_size = fitted.font_size; "Actor drawn");
        }
    }

    fn draw_actions<S: DrawingSurface + ?Sized>(
        &self,
        registry: &ActorRegistry,
        actions: &[&ActionDeclaration],
        columns: Columns,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        let mut lifeline_length = 0.0;

        for (index, action) in actions.iter().enumerate() {
            let previous_length = lifeline_length;
            lifeline_length += self.lifeline_increment;
            for (_, actor) in registry.iter() {
                let x = columns.mid_x(actor.index());
                surface.draw_line(
                    Point::new(x, self.box_height + previous_length),
                    Point::new(x, self.box_height + lifeline_length),
                );
            }

            let left = registry
                .get(&action.left_actor)
                .ok_or_else(|| RenderError::UndefinedActor(action.left_actor.clone()))?;
            let right = registry
                .get(&action.right_actor)
                .ok_or_else(|| RenderError::UndefinedActor(action.right_actor.clone()))?;

            let y = self.box_height + self.vertical_spacing * (index + 1) as f32;
            let left_point = Point::new(columns.mid_x(left.index()), y);
            let right_point = Point::new(columns.mid_x(right.index()), y);

            self.draw_action_label(&action.value, left_point, right_point, surface);

            let (from, to) = match action.direction {
                Arrow::Right => (left_point, right_point),
                Arrow::Left => (right_point, left_point),
            };
            draw_arrow(surface, from, to, &self.arrow_head);

            trace!(index, from:?, to:?; "Action drawn");
        }

        Ok(())
    }

    /// Draw an action label centered over the span between two endpoints.
    ///
    /// The bottom of the text sits `label_gap` above the arrow.
    fn draw_action_label<S: DrawingSurface + ?Sized>(
        &self,
        label: &str,
        a: Point,
        b: Point,
        surface: &mut S,
    ) {
        let span = (b.x() - a.x()).abs();
        let fitted = fit_text(surface, label, span, &self.font_fit);

        let x = a.x().min(b.x()) + (span - fitted.width) / 2.0;
        let y = a.y() - self.label_gap - fitted.font_size / 2.0;
        surface.draw_text(label, Point::new(x, y), span);

        self.font_fit.restore(surface);
    }
}

impl Default for Engine {
    fn default() -> Self {
        EngineBuilder::new().build()
    }
}

/// Builder for configuring an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    max_box_width: f32,
    box_height: f32,
    spacing: f32,
    vertical_spacing: f32,
    lifeline_increment: f32,
    label_padding: f32,
    label_gap: f32,
    default_font_size: f32,
    font_size_step: f32,
    min_font_size: f32,
    arrow_head: ArrowHead,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            max_box_width: 200.0,
            box_height: 80.0,
            spacing: 100.0,
            vertical_spacing: 50.0,
            lifeline_increment: 100.0,
            label_padding: 40.0,
            label_gap: 3.0,
            default_font_size: 14.0,
            font_size_step: 1.0,
            min_font_size: 6.0,
            arrow_head: ArrowHead::default(),
        }
    }
}

impl EngineBuilder {
    /// Create a new engine builder with the default layout constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the widest an actor box may get
    pub fn with_max_box_width(mut self, width: f32) -> Self {
        self.max_box_width = width;
        self
    }

    /// Set the height of actor boxes
    pub fn with_box_height(mut self, height: f32) -> Self {
        self.box_height = height;
        self
    }

    /// Set the horizontal gap between actor boxes
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the vertical distance between consecutive actions
    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Set how much every lifeline grows per action
    pub fn with_lifeline_increment(mut self, increment: f32) -> Self {
        self.lifeline_increment = increment;
        self
    }

    /// Set the horizontal room reserved around actor labels
    pub fn with_label_padding(mut self, padding: f32) -> Self {
        self.label_padding = padding;
        self
    }

    /// Set the gap between an action label and its arrow
    pub fn with_label_gap(mut self, gap: f32) -> Self {
        self.label_gap = gap;
        self
    }

    /// Set the font sizing policy: default size, shrink step and floor
    pub fn with_font_sizes(mut self, default_size: f32, step: f32, min_size: f32) -> Self {
        self.default_font_size = default_size;
        self.font_size_step = step;
        self.min_font_size = min_size;
        self
    }

    pub fn with_arrow_head(mut self, arrow_head: ArrowHead) -> Self {
        self.arrow_head = arrow_head;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            max_box_width: self.max_box_width,
            box_height: self.box_height,
            spacing: self.spacing,
            vertical_spacing: self.vertical_spacing,
            lifeline_increment: self.lifeline_increment,
            label_padding: self.label_padding,
            label_gap: self.label_gap,
            font_fit: FontFit::new(
                self.default_font_size,
                self.font_size_step,
                self.min_font_size,
            ),
            arrow_head: self.arrow_head,
        }
    }
}
