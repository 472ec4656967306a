use crate::geometry::{Dimension, LineString, Point, Polygon};

pub(crate) const P0: &str = "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))";
pub(crate) const P1: &str =
    "POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))";
pub(crate) const P2: &str = "POLYGON ZM((30 10 10 -10.10, 40 40 20 -20.20, 20 40 30 -30.30, 10 20 40 -40.40, 30 10 50 -50.50))";

pub(crate) fn ring(coords: &[[f64; 2]]) -> LineString {
    LineString::new(
        coords.iter().map(|[x, y]| Point::new(*x, *y)).collect(),
        Dimension::XY,
    )
}

pub(crate) fn p0() -> Polygon {
    Polygon::new(
        vec![ring(&[[30., 10.], [40., 40.], [20., 40.], [10., 20.], [30., 10.]])],
        Dimension::XY,
    )
}

pub(crate) fn p1() -> Polygon {
    Polygon::new(
        vec![
            ring(&[[35., 10.], [45., 45.], [15., 40.], [10., 20.], [35., 10.]]),
            ring(&[[20., 30.], [35., 35.], [30., 20.], [20., 30.]]),
        ],
        Dimension::XY,
    )
}

pub(crate) fn p2() -> Polygon {
    let exterior = LineString::new(
        vec![
            Point::new_zm(30., 10., 10., -10.10),
            Point::new_zm(40., 40., 20., -20.20),
            Point::new_zm(20., 40., 30., -30.30),
            Point::new_zm(10., 20., 40., -40.40),
            Point::new_zm(30., 10., 50., -50.50),
        ],
        Dimension::XYZM,
    );
    Polygon::new(vec![exterior], Dimension::XYZM)
}
