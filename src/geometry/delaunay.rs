//! Incremental Delaunay triangulation (Bowyer-Watson) over a face/neighbor structure that
//! closes the convex hull with faces incident to a single vertex at infinity. All decisions
//! use the exact predicates, so degenerate inputs (duplicates, collinear or cocircular
//! points) are handled.
//!
//! Faces store their vertices in counter-clockwise order; `neighbor(f, i)` is the face
//! across the edge opposite to the `i`-th vertex of `f`.

use std::{cmp::Ordering, ops::Range};

use fxhash::FxHashMap;
use itertools::Itertools;
use log::trace;
use smallvec::SmallVec;

use super::*;

pub type VertexId = u32;
pub type FaceId = u32;

/// Vertex at infinity; every hull edge forms an infinite face with it
pub const INFINITE_VERTEX: VertexId = VertexId::MAX;
const NO_FACE: FaceId = FaceId::MAX;

#[inline]
fn ccw(i: usize) -> usize {
    (i + 1) % 3
}

#[inline]
fn cw(i: usize) -> usize {
    (i + 2) % 3
}

#[derive(Clone, Debug)]
struct Face {
    v: [VertexId; 3],
    n: [FaceId; 3],
    alive: bool,
    mark: u32,
}

impl Face {
    fn index_of(&self, v: VertexId) -> usize {
        if self.v[0] == v {
            0
        } else if self.v[1] == v {
            1
        } else {
            debug_assert_eq!(self.v[2], v);
            2
        }
    }

    fn infinite_index(&self) -> Option<usize> {
        self.v.iter().position(|&v| v == INFINITE_VERTEX)
    }
}

#[derive(Clone, Debug)]
pub struct Delaunay {
    points: Vec<Point>,
    info: Vec<usize>,
    incident_face: Vec<FaceId>,
    faces: Vec<Face>,
    free_faces: Vec<FaceId>,
    lookup: FxHashMap<(u64, u64), VertexId>,
    /// All vertices while the triangulation has dimension below two
    collinear: Vec<VertexId>,
    last_face: FaceId,
    epoch: u32,
}

impl Default for Delaunay {
    fn default() -> Self {
        Self::new()
    }
}

impl Delaunay {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            info: Vec::new(),
            incident_face: Vec::new(),
            faces: Vec::new(),
            free_faces: Vec::new(),
            lookup: FxHashMap::default(),
            collinear: Vec::new(),
            last_face: NO_FACE,
            epoch: 0,
        }
    }

    /// Triangulates the points; `info` of every vertex is the index of its first occurrence
    /// in `points`. Points are inserted along a Hilbert curve to keep point location short.
    pub fn from_points(points: &[Point]) -> Self {
        let mut dt = Self::new();
        for i in hilbert_order(points) {
            dt.insert(points[i], i);
        }
        trace!(
            "triangulated {} points into {} vertices and {} faces",
            points.len(),
            dt.number_of_vertices(),
            dt.faces().count()
        );
        dt
    }

    pub fn number_of_vertices(&self) -> usize {
        self.points.len()
    }

    /// Affine dimension of the vertex set: -1 if empty, 0 for a single point,
    /// 1 if all are collinear and 2 otherwise
    pub fn dimension(&self) -> i32 {
        if !self.faces.is_empty() {
            2
        } else {
            self.points.len().min(2) as i32 - 1
        }
    }

    pub fn vertices(&self) -> Range<VertexId> {
        0..self.points.len() as VertexId
    }

    pub fn point(&self, v: VertexId) -> Point {
        self.points[v as usize]
    }

    pub fn info(&self, v: VertexId) -> usize {
        self.info[v as usize]
    }

    /// Number of face slots; every `FaceId` is below this and can index per-face arrays
    pub fn face_slots(&self) -> usize {
        self.faces.len()
    }

    /// All live faces including the infinite ones
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len() as FaceId).filter(|&f| self.faces[f as usize].alive)
    }

    pub fn finite_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces().filter(|&f| !self.is_infinite(f))
    }

    pub fn is_infinite(&self, f: FaceId) -> bool {
        self.faces[f as usize].infinite_index().is_some()
    }

    pub fn vertex(&self, f: FaceId, i: usize) -> VertexId {
        self.faces[f as usize].v[i]
    }

    pub fn neighbor(&self, f: FaceId, i: usize) -> FaceId {
        self.faces[f as usize].n[i]
    }

    /// Index `j` such that `neighbor(neighbor(f, i), j) == f`
    pub fn mirror_index(&self, f: FaceId, i: usize) -> usize {
        let face = &self.faces[f as usize];
        let (a, b) = (face.v[ccw(i)], face.v[cw(i)]);
        let other = &self.faces[face.n[i] as usize];
        (0..3)
            .find(|&j| other.v[ccw(j)] == b && other.v[cw(j)] == a)
            .unwrap_or(0)
    }

    /// Circumcenter of a finite face
    pub fn circumcenter(&self, f: FaceId) -> Point {
        let [a, b, c] = self.faces[f as usize].v.map(|v| self.point(v));
        circumcenter(&a, &b, &c)
    }

    /// Inserts a point and returns its vertex; a point already present returns the existing
    /// vertex and keeps its `info`
    pub fn insert(&mut self, p: Point, info: usize) -> VertexId {
        if let Some(&v) = self.lookup.get(&p.bits()) {
            return v;
        }

        let planar = !self.faces.is_empty();
        let v = self.points.len() as VertexId;
        self.points.push(p);
        self.info.push(info);
        self.incident_face.push(NO_FACE);
        self.lookup.insert(p.bits(), v);

        if planar {
            self.insert_in_plane(v);
            return v;
        }

        if let [a, b, ..] = self.collinear[..] {
            if !orientation(&self.point(a), &self.point(b), &p).is_collinear() {
                self.leave_line(v);
                return v;
            }
        }

        self.collinear.push(v);
        v
    }

    /// First point off the line: builds a triangle and inserts the remaining collinear points
    fn leave_line(&mut self, v: VertexId) {
        let collinear = std::mem::take(&mut self.collinear);
        let (mut a, mut b) = (collinear[0], collinear[1]);
        if orientation(&self.point(a), &self.point(b), &self.point(v)).is_cw() {
            std::mem::swap(&mut a, &mut b);
        }

        // faces 0..4: the triangle and the infinite faces across its edges
        const INF: VertexId = INFINITE_VERTEX;
        self.faces = vec![
            Face::new([a, b, v], [1, 2, 3]),
            Face::new([v, b, INF], [3, 2, 0]),
            Face::new([a, v, INF], [1, 3, 0]),
            Face::new([b, a, INF], [2, 1, 0]),
        ];
        for u in [a, b, v] {
            self.incident_face[u as usize] = 0;
        }
        self.last_face = 0;

        for &u in &collinear[2..] {
            self.insert_in_plane(u);
        }
    }

    fn new_face(&mut self, v: [VertexId; 3], n: [FaceId; 3]) -> FaceId {
        match self.free_faces.pop() {
            Some(f) => {
                self.faces[f as usize] = Face::new(v, n);
                f
            }
            None => {
                self.faces.push(Face::new(v, n));
                (self.faces.len() - 1) as FaceId
            }
        }
    }

    fn in_conflict(&self, f: FaceId, q: &Point) -> bool {
        let face = &self.faces[f as usize];
        match face.infinite_index() {
            None => {
                let [a, b, c] = face.v.map(|v| self.point(v));
                incircle(&a, &b, &c, q) == Ordering::Greater
            }
            Some(k) => {
                let (u, w) = (self.point(face.v[ccw(k)]), self.point(face.v[cw(k)]));
                match orientation(&u, &w, q) {
                    Orientation::CounterClockwise => true,
                    Orientation::Collinear => strictly_between(&u, &w, q),
                    Orientation::Clockwise => false,
                }
            }
        }
    }

    /// Visibility walk towards `q` starting at the most recently created face. Returns a
    /// finite face containing `q` (possibly on its boundary) or an infinite face whose hull
    /// edge sees `q`. Requires dimension two.
    fn walk(&self, q: &Point) -> FaceId {
        self.walk_from(self.last_face, q)
    }

    fn walk_from(&self, start: FaceId, q: &Point) -> FaceId {
        let mut f = start;
        if let Some(k) = self.faces[f as usize].infinite_index() {
            f = self.faces[f as usize].n[k];
        }

        let mut steps = 0usize;
        'walk: loop {
            let face = &self.faces[f as usize];
            if face.infinite_index().is_some() {
                return f;
            }

            let start = (f as usize + steps) % 3;
            for i in (0..3).map(|k| (start + k) % 3) {
                let (a, b) = (self.point(face.v[ccw(i)]), self.point(face.v[cw(i)]));
                if orientation(&a, &b, q).is_cw() {
                    f = face.n[i];
                    steps += 1;
                    continue 'walk;
                }
            }
            return f;
        }
    }

    /// A face containing `q` as in the walk above; `None` below dimension two
    pub fn locate(&self, q: &Point) -> Option<FaceId> {
        (self.dimension() == 2).then(|| self.walk(q))
    }

    fn insert_in_plane(&mut self, v: VertexId) {
        let q = self.point(v);
        let start = self.walk(&q);

        self.epoch += 1;
        let epoch = self.epoch;

        // conflict region by breadth first search; it is star shaped around q
        let mut region: SmallVec<[FaceId; 16]> = SmallVec::new();
        let mut boundary: SmallVec<[(VertexId, VertexId, FaceId); 16]> = SmallVec::new();
        region.push(start);
        self.faces[start as usize].mark = epoch;

        let mut i = 0;
        while i < region.len() {
            let f = region[i];
            i += 1;
            for k in 0..3 {
                let g = self.faces[f as usize].n[k];
                if self.faces[g as usize].mark == epoch {
                    continue;
                }
                if self.in_conflict(g, &q) {
                    self.faces[g as usize].mark = epoch;
                    region.push(g);
                } else {
                    let face = &self.faces[f as usize];
                    boundary.push((face.v[ccw(k)], face.v[cw(k)], g));
                }
            }
        }

        for &f in &region {
            self.faces[f as usize].alive = false;
            self.free_faces.push(f);
        }

        let mut by_start: FxHashMap<VertexId, FaceId> = FxHashMap::default();
        let mut created: SmallVec<[FaceId; 16]> = SmallVec::new();
        for &(a, b, outside) in &boundary {
            let f = self.new_face([a, b, v], [NO_FACE, NO_FACE, outside]);
            let out = &mut self.faces[outside as usize];
            if let Some(j) = (0..3).find(|&j| out.v[ccw(j)] == b && out.v[cw(j)] == a) {
                out.n[j] = f;
            }
            by_start.insert(a, f);
            created.push(f);
        }

        for &f in &created {
            let [a, b, _] = self.faces[f as usize].v;
            if let Some(&g) = by_start.get(&b) {
                self.faces[f as usize].n[0] = g;
                self.faces[g as usize].n[1] = f;
            }
            if a != INFINITE_VERTEX {
                self.incident_face[a as usize] = f;
            }
            self.incident_face[v as usize] = f;
            self.last_face = f;
        }
    }

    /// Finite neighbors of `v`; in counter-clockwise order in dimension two
    pub fn incident_vertices(&self, v: VertexId) -> SmallVec<[VertexId; 8]> {
        let mut result = SmallVec::new();
        if self.dimension() < 2 {
            // the closest vertices on either side along the line
            let p = self.point(v);
            let key = |u: &VertexId| {
                let q = self.point(*u);
                (q.x, q.y)
            };
            let before = self
                .vertices()
                .filter(|&u| key(&u) < (p.x, p.y))
                .max_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
            let after = self
                .vertices()
                .filter(|&u| key(&u) > (p.x, p.y))
                .min_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
            result.extend(before);
            result.extend(after);
            return result;
        }

        let first = self.incident_face[v as usize];
        let mut f = first;
        loop {
            let face = &self.faces[f as usize];
            let i = face.index_of(v);
            let w = face.v[ccw(i)];
            if w != INFINITE_VERTEX {
                result.push(w);
            }
            f = face.n[ccw(i)];
            if f == first {
                break;
            }
        }
        result
    }

    /// Vertex closest to `q` (ties broken arbitrarily); `None` if empty
    pub fn nearest_vertex(&self, q: &Point) -> Option<VertexId> {
        self.nearest_vertex_near(q, None)
    }

    /// As [`Delaunay::nearest_vertex`], but point location starts at a face of `hint`; a
    /// hint close to `q` keeps the walk short
    pub fn nearest_vertex_near(&self, q: &Point, hint: Option<VertexId>) -> Option<VertexId> {
        let closer = |a: &VertexId, b: &VertexId| compare_distance(q, &self.point(*a), &self.point(*b));

        if self.dimension() < 2 {
            return self.vertices().min_by(closer);
        }

        let start = hint.map_or(self.last_face, |v| self.incident_face[v as usize]);
        let face = &self.faces[self.walk_from(start, q) as usize];
        let mut best = face
            .v
            .iter()
            .copied()
            .filter(|&v| v != INFINITE_VERTEX)
            .min_by(closer)?;

        // greedy descent terminates at the nearest vertex in a Delaunay triangulation
        loop {
            let mut improved = false;
            for w in self.incident_vertices(best) {
                if closer(&w, &best) == Ordering::Less {
                    best = w;
                    improved = true;
                }
            }
            if !improved {
                return Some(best);
            }
        }
    }

    /// Nearest vertex of every query. Queries are answered along a Hilbert curve, each walk
    /// starting from the previous answer, so that many queries cost little more than their
    /// number.
    pub fn nearest_vertices(&self, queries: &[Point]) -> Vec<Option<VertexId>> {
        let mut nearest = vec![None; queries.len()];
        let mut hint = None;
        for i in hilbert_order(queries) {
            nearest[i] = self.nearest_vertex_near(&queries[i], hint);
            hint = nearest[i].or(hint);
        }
        nearest
    }

    /// Every finite edge exactly once
    pub fn finite_edges(&self) -> Vec<(VertexId, VertexId)> {
        if self.dimension() < 2 {
            return self
                .collinear
                .iter()
                .copied()
                .sorted_by(|&a, &b| {
                    let (p, q) = (self.point(a), self.point(b));
                    (p.x, p.y).partial_cmp(&(q.x, q.y)).unwrap_or(Ordering::Equal)
                })
                .tuple_windows()
                .collect();
        }

        let mut edges = Vec::with_capacity(3 * self.points.len());
        for f in self.faces() {
            let face = &self.faces[f as usize];
            for i in 0..3 {
                let (a, b) = (face.v[ccw(i)], face.v[cw(i)]);
                if a != INFINITE_VERTEX && b != INFINITE_VERTEX && f < face.n[i] {
                    edges.push((a, b));
                }
            }
        }
        edges
    }
}

impl Face {
    fn new(v: [VertexId; 3], n: [FaceId; 3]) -> Self {
        Self {
            v,
            n,
            alive: true,
            mark: 0,
        }
    }
}

/// Position of `(x, y)` on a Hilbert curve filling a `2^bits` square
fn hilbert_index(mut x: u32, mut y: u32, bits: u32) -> u64 {
    let n = 1u32 << bits;
    let mut d = 0u64;
    let mut s = n / 2;
    while s > 0 {
        let rx = u32::from(x & s > 0);
        let ry = u32::from(y & s > 0);
        d += (s as u64) * (s as u64) * ((3 * rx) ^ ry) as u64;
        if ry == 0 {
            if rx == 1 {
                x = n - 1 - x;
                y = n - 1 - y;
            }
            std::mem::swap(&mut x, &mut y);
        }
        s /= 2;
    }
    d
}

/// Indices of the points sorted along a Hilbert curve; stable for equal keys
fn hilbert_order(points: &[Point]) -> Vec<usize> {
    const BITS: u32 = 16;
    let (min_x, max_x) = points
        .iter()
        .map(|p| p.x)
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let (min_y, max_y) = points
        .iter()
        .map(|p| p.y)
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));

    let extent = (max_x - min_x).max(max_y - min_y);
    let scale = if extent > 0.0 {
        ((1u32 << BITS) - 1) as f64 / extent
    } else {
        0.0
    };

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_cached_key(|&i| {
        let p = &points[i];
        hilbert_index(
            ((p.x - min_x) * scale) as u32,
            ((p.y - min_y) * scale) as u32,
            BITS,
        )
    });
    order
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn pt(x: i64, y: i64) -> Point {
        Point::from((x, y))
    }

    /// Checks neighbor symmetry, orientation, the empty circle property and Euler's formula
    fn assert_valid(dt: &Delaunay) {
        let n = dt.number_of_vertices();
        let mut hull = 0;
        for f in dt.faces() {
            let face = &dt.faces[f as usize];
            for i in 0..3 {
                let g = face.n[i];
                assert!(dt.faces[g as usize].alive);
                assert_eq!(dt.neighbor(g, dt.mirror_index(f, i)), f);
            }
            match face.infinite_index() {
                Some(_) => hull += 1,
                None => {
                    let [a, b, c] = face.v.map(|v| dt.point(v));
                    assert!(orientation(&a, &b, &c).is_ccw());
                    for v in dt.vertices() {
                        assert_ne!(incircle(&a, &b, &c, &dt.point(v)), Ordering::Greater);
                    }
                }
            }
        }
        assert_eq!(dt.finite_edges().len(), 3 * n - 3 - hull);
        assert_eq!(dt.finite_faces().count(), 2 * n - 2 - hull);
    }

    #[test]
    fn square_with_center() {
        let points = [pt(0, 0), pt(2, 0), pt(2, 2), pt(0, 2), pt(1, 1)];
        let dt = Delaunay::from_points(&points);
        assert_eq!(dt.dimension(), 2);
        assert_eq!(dt.finite_edges().len(), 8);
        assert_eq!(dt.finite_faces().count(), 4);
        assert_valid(&dt);

        let center = dt.vertices().find(|&v| dt.info(v) == 4).unwrap();
        let mut around = dt.incident_vertices(center).into_iter().map(|v| dt.info(v)).collect_vec();
        around.sort();
        assert_eq!(around, vec![0, 1, 2, 3]);

        let v = dt.nearest_vertex(&Point::new(1.9, 0.2)).unwrap();
        assert_eq!(dt.info(v), 1);
    }

    #[test]
    fn collinear_then_planar() {
        let mut dt = Delaunay::new();
        for (i, x) in [3, 0, 4, 1, 2].into_iter().enumerate() {
            dt.insert(pt(x, x), i);
        }
        assert_eq!(dt.dimension(), 1);
        assert_eq!(dt.finite_edges().len(), 4);
        assert_eq!(dt.info(dt.nearest_vertex(&Point::new(2.2, 1.0)).unwrap()), 4);
        let mut around = dt.incident_vertices(0).into_iter().map(|v| dt.info(v)).collect_vec();
        around.sort();
        assert_eq!(around, vec![2, 4]);

        dt.insert(pt(0, 5), 5);
        assert_eq!(dt.dimension(), 2);
        assert_eq!(dt.finite_edges().len(), 9);
        assert_valid(&dt);
    }

    #[test]
    fn duplicates_and_small_sets() {
        let mut dt = Delaunay::new();
        assert_eq!(dt.dimension(), -1);
        assert!(dt.nearest_vertex(&Point::default()).is_none());

        let v = dt.insert(pt(1, 1), 0);
        assert_eq!(dt.insert(pt(1, 1), 1), v);
        assert_eq!(dt.dimension(), 0);
        assert!(dt.finite_edges().is_empty());
        assert_eq!(dt.nearest_vertex(&pt(5, 5)), Some(v));

        let dt = Delaunay::from_points(&[pt(0, 0), pt(1, 0), pt(0, 0), pt(0, 1)]);
        assert_eq!(dt.number_of_vertices(), 3);
        assert_eq!(dt.finite_faces().count(), 1);
        let origin = dt.nearest_vertex(&pt(0, 0)).unwrap();
        assert_eq!(dt.info(origin), 0);
    }

    #[test]
    fn grid_degeneracies() {
        // many cocircular and collinear points
        let points = (0..10).cartesian_product(0..10).map(|(x, y)| pt(x, y)).collect_vec();
        let dt = Delaunay::from_points(&points);
        assert_valid(&dt);
        for (x, y) in [(3, 3), (-5, 0), (20, 20), (4, 9)] {
            let v = dt.nearest_vertex(&pt(x, y)).unwrap();
            let expected = pt(x.clamp(0, 9), y.clamp(0, 9));
            assert_eq!(dt.point(v), expected);
        }
    }

    #[test]
    fn random_points() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xde1a);
        for round in 0..20 {
            let n = rng.gen_range(3..200);
            let range = if round % 2 == 0 { 20 } else { 1_000_000 };
            let points = (0..n)
                .map(|_| pt(rng.gen_range(-range..range), rng.gen_range(-range..range)))
                .collect_vec();
            let dt = Delaunay::from_points(&points);
            if dt.dimension() < 2 {
                continue;
            }
            assert_valid(&dt);

            for _ in 0..20 {
                let q = Point::new(rng.gen_range(-1.5..1.5) * range as f64, rng.gen_range(-1.5..1.5) * range as f64);
                let v = dt.nearest_vertex(&q).unwrap();
                let best = points
                    .iter()
                    .min_by(|a, b| compare_distance(&q, a, b))
                    .unwrap();
                assert_eq!(compare_distance(&q, &dt.point(v), best), Ordering::Equal);
            }
        }
    }

    #[test]
    fn batched_nearest_vertices() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xb15);
        let points = (0..2000)
            .map(|_| pt(rng.gen_range(-5000..5000), rng.gen_range(-5000..5000)))
            .collect_vec();
        let dt = Delaunay::from_points(&points);
        let queries = (0..500)
            .map(|_| pt(rng.gen_range(-6000..6000), rng.gen_range(-6000..6000)))
            .collect_vec();

        let nearest = dt.nearest_vertices(&queries);
        assert_eq!(nearest.len(), queries.len());
        for (q, v) in queries.iter().zip(nearest) {
            let best = points.iter().min_by(|a, b| compare_distance(q, a, b)).unwrap();
            assert_eq!(compare_distance(q, &dt.point(v.unwrap()), best), Ordering::Equal);
        }

        assert!(Delaunay::new().nearest_vertices(&queries).iter().all(Option::is_none));
        let line = Delaunay::from_points(&[pt(0, 0), pt(4, 0)]);
        assert_eq!(line.nearest_vertices(&[pt(3, 3), pt(-1, 0)]).len(), 2);
    }

    #[test]
    fn hilbert_curve_is_a_bijection() {
        let mut seen = vec![false; 64];
        for x in 0..8 {
            for y in 0..8 {
                let d = hilbert_index(x, y, 3) as usize;
                assert!(!seen[d]);
                seen[d] = true;
            }
        }
        assert_eq!(hilbert_index(0, 0, 3), 0);
    }
}
