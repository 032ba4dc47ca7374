extern crate tension_spline;

use tension_spline::TensionSpline;

fn main() {
    let t = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let x_min = t[0];
    let x_max = t[t.len() - 1];

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut queries = Vec::new();
    for i in 0..=number_of_steps {
        queries.push(x_min + step * i as f64);
    }

    println!("x;tau=0.1;tau=1;tau=10");
    let splines: Vec<TensionSpline> = [0.1, 1.0, 10.0]
        .iter()
        .map(|&tau| TensionSpline::new(t.clone(), y.clone(), tau).unwrap())
        .collect();

    let results: Vec<Vec<f64>> = splines
        .iter()
        .map(|spline| spline.evaluate(&queries).unwrap())
        .collect();

    for i in 0..=number_of_steps {
        println!(
            "{:.2};{:.2};{:.2};{:.2}",
            queries[i], results[0][i], results[1][i], results[2][i]
        );
    }
}
