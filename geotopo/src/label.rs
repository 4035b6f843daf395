//! Topological classification of graph components relative to two input geometries.
//!
//! A [`Label`] stores a [`TopologyLocation`] for each of the two geometries taking part in an operation (index `0`
//! and `1`). A location of a graph component relative to a geometry is one of [`Location`] values, or `None` if it is
//! not known (yet).

use std::fmt::{Display, Formatter};

use geotopo_types::Location;

use crate::position::Position;

/// Locations of a graph component relative to a single geometry.
///
/// A *line* location only has the `On` position. An *area* location also stores the locations of the `Left` and
/// `Right` sides of the component.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TopologyLocation {
    locations: [Option<Location>; 3],
    is_area: bool,
}

impl TopologyLocation {
    /// Creates a line location.
    pub fn line(on: impl Into<Option<Location>>) -> Self {
        Self {
            locations: [on.into(), None, None],
            is_area: false,
        }
    }

    /// Creates an area location.
    pub fn area(
        on: impl Into<Option<Location>>,
        left: impl Into<Option<Location>>,
        right: impl Into<Option<Location>>,
    ) -> Self {
        Self {
            locations: [on.into(), left.into(), right.into()],
            is_area: true,
        }
    }

    fn len(&self) -> usize {
        if self.is_area {
            3
        } else {
            1
        }
    }

    fn slots(&self) -> &[Option<Location>] {
        &self.locations[..self.len()]
    }

    /// Location at the given position. Side positions of a line location are always `None`.
    pub fn get(&self, position: Position) -> Option<Location> {
        self.locations[position.index()]
    }

    /// Returns true if all the positions are unknown.
    pub fn is_null(&self) -> bool {
        self.slots().iter().all(Option::is_none)
    }

    /// Returns true if at least one of the positions is unknown.
    pub fn is_any_null(&self) -> bool {
        self.slots().iter().any(Option::is_none)
    }

    /// Returns true if the location at `position` is the same in both locations.
    pub fn is_equal_on_side(&self, other: &TopologyLocation, position: Position) -> bool {
        self.get(position) == other.get(position)
    }

    /// Returns true for area locations.
    pub fn is_area(&self) -> bool {
        self.is_area
    }

    /// Returns true for line locations.
    pub fn is_line(&self) -> bool {
        !self.is_area
    }

    /// Swaps the `Left` and `Right` locations.
    pub fn flip(&mut self) {
        if self.is_area {
            self.locations.swap(Position::Left.index(), Position::Right.index());
        }
    }

    /// Sets all positions to `location`.
    pub fn set_all_locations(&mut self, location: Location) {
        let len = self.len();
        for slot in &mut self.locations[..len] {
            *slot = Some(location);
        }
    }

    /// Sets all unknown positions to `location`.
    pub fn set_all_locations_if_null(&mut self, location: Location) {
        let len = self.len();
        for slot in &mut self.locations[..len] {
            slot.get_or_insert(location);
        }
    }

    /// Sets the location at the position. Setting a side of a line location turns it into an area location.
    pub fn set_location(&mut self, position: Position, location: impl Into<Option<Location>>) {
        if position != Position::On {
            self.is_area = true;
        }
        self.locations[position.index()] = location.into();
    }

    /// Sets all three positions, turning the location into an area location.
    pub fn set_locations(
        &mut self,
        on: impl Into<Option<Location>>,
        left: impl Into<Option<Location>>,
        right: impl Into<Option<Location>>,
    ) {
        *self = Self::area(on, left, right);
    }

    /// Returns true if every position has the given location.
    pub fn all_positions_equal(&self, location: Location) -> bool {
        self.slots().iter().all(|l| *l == Some(location))
    }

    /// Fills unknown positions with the locations from `other`. Known positions are never overwritten.
    ///
    /// Merging an area location into a line location turns the receiver into an area location first, keeping its
    /// `On` location.
    pub fn merge(&mut self, other: &TopologyLocation) {
        if other.is_area && !self.is_area {
            self.is_area = true;
            self.locations[Position::Left.index()] = None;
            self.locations[Position::Right.index()] = None;
        }

        let len = self.len().min(other.len());
        for i in 0..len {
            if self.locations[i].is_none() {
                self.locations[i] = other.locations[i];
            }
        }
    }

    fn to_line(self) -> Self {
        Self::line(self.get(Position::On))
    }
}

impl Display for TopologyLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_area {
            write!(f, "{}", Location::symbol_of(self.get(Position::Left)))?;
        }
        write!(f, "{}", Location::symbol_of(self.get(Position::On)))?;
        if self.is_area {
            write!(f, "{}", Location::symbol_of(self.get(Position::Right)))?;
        }

        Ok(())
    }
}

/// Topological classification of a graph component relative to two geometries.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    elements: [TopologyLocation; 2],
}

impl Label {
    /// Line label with the same `On` location for both geometries.
    pub fn line(on: impl Into<Option<Location>>) -> Self {
        let location = TopologyLocation::line(on);
        Self {
            elements: [location, location],
        }
    }

    /// Area label with the same locations for both geometries.
    pub fn area(
        on: impl Into<Option<Location>>,
        left: impl Into<Option<Location>>,
        right: impl Into<Option<Location>>,
    ) -> Self {
        let location = TopologyLocation::area(on, left, right);
        Self {
            elements: [location, location],
        }
    }

    /// Line label for the geometry with index `geom`. The location of the other geometry is unknown.
    pub fn line_for(geom: usize, on: impl Into<Option<Location>>) -> Self {
        let mut label = Self::line(None);
        label.elements[geom] = TopologyLocation::line(on);
        label
    }

    /// Area label for the geometry with index `geom`. The other geometry gets an unknown area location.
    pub fn area_for(
        geom: usize,
        on: impl Into<Option<Location>>,
        left: impl Into<Option<Location>>,
        right: impl Into<Option<Location>>,
    ) -> Self {
        let mut label = Self::area(None, None, None);
        label.elements[geom] = TopologyLocation::area(on, left, right);
        label
    }

    /// Line label with the `On` locations of the given label.
    pub fn to_line_label(&self) -> Self {
        Self {
            elements: [self.elements[0].to_line(), self.elements[1].to_line()],
        }
    }

    /// Topology location for the geometry.
    pub fn element(&self, geom: usize) -> &TopologyLocation {
        &self.elements[geom]
    }

    /// Swaps the sides of both geometries.
    pub fn flip(&mut self) {
        for element in &mut self.elements {
            element.flip();
        }
    }

    /// Returns the label with the swapped sides.
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Location at the position relative to the geometry.
    pub fn location(&self, geom: usize, position: Position) -> Option<Location> {
        self.elements[geom].get(position)
    }

    /// Location of the component itself relative to the geometry.
    pub fn on_location(&self, geom: usize) -> Option<Location> {
        self.location(geom, Position::On)
    }

    /// Sets the location at the position.
    pub fn set_location(&mut self, geom: usize, position: Position, location: impl Into<Option<Location>>) {
        self.elements[geom].set_location(position, location);
    }

    /// Sets all positions of the geometry to `location`.
    pub fn set_all_locations(&mut self, geom: usize, location: Location) {
        self.elements[geom].set_all_locations(location);
    }

    /// Sets all unknown positions of the geometry to `location`.
    pub fn set_all_locations_if_null(&mut self, geom: usize, location: Location) {
        self.elements[geom].set_all_locations_if_null(location);
    }

    /// Fills the unknown positions of both geometries from `other`.
    pub fn merge(&mut self, other: &Label) {
        for (element, other) in self.elements.iter_mut().zip(&other.elements) {
            element.merge(other);
        }
    }

    /// Number of geometries the label has any known location for.
    pub fn geometry_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_null()).count()
    }

    /// Returns true if no location relative to the geometry is known.
    pub fn is_null(&self, geom: usize) -> bool {
        self.elements[geom].is_null()
    }

    /// Returns true if any location relative to the geometry is unknown.
    pub fn is_any_null(&self, geom: usize) -> bool {
        self.elements[geom].is_any_null()
    }

    /// Returns true if the label is an area label for any of the geometries.
    pub fn is_area(&self) -> bool {
        self.elements.iter().any(TopologyLocation::is_area)
    }

    /// Returns true if the label is an area label for the geometry.
    pub fn is_area_for(&self, geom: usize) -> bool {
        self.elements[geom].is_area()
    }

    /// Returns true if the label is a line label for the geometry.
    pub fn is_line(&self, geom: usize) -> bool {
        self.elements[geom].is_line()
    }

    /// Returns true if both labels have the same locations at the position for both geometries.
    pub fn is_equal_on_side(&self, other: &Label, position: Position) -> bool {
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| a.is_equal_on_side(b, position))
    }

    /// Returns true if all positions of the geometry have the given location.
    pub fn all_positions_equal(&self, geom: usize, location: Location) -> bool {
        self.elements[geom].all_positions_equal(location)
    }

    /// Turns the location for the geometry into a line location, keeping only the `On` position.
    pub fn to_line(&mut self, geom: usize) {
        if self.elements[geom].is_area() {
            self.elements[geom] = self.elements[geom].to_line();
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "A:{} B:{}", self.elements[0], self.elements[1])
    }
}
