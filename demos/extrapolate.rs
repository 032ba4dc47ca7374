extern crate tension_spline;

use tension_spline::TensionSpline;

fn main() {
    let t = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 2.0, 1.0, 3.0, 0.0];

    let spline = TensionSpline::new(t, y, 2.0).unwrap();

    // queries extend one unit beyond the knot range on both sides
    let x_min = -1.0;
    let x_max = 5.0;

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut queries = Vec::new();
    for i in 0..=number_of_steps {
        queries.push(x_min + step * i as f64);
    }

    let result = spline.evaluate(&queries).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", queries[i], result[i]);
    }
}
