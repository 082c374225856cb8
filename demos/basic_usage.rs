use vector_ops::{cross_product, dot_product, scale, subtract, sum, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Vector Ops Demo");
    println!("===============\n");

    let a = Vector::new([1.0, 2.0, 3.0, 4.0]);
    let b = Vector::new([4.0, 5.0, 6.0, 7.0]);
    println!("sum({}, {}) = {}", a, b, sum(&[&a, &b]));

    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let c = Vector::new([7.0, 8.0, 9.0]);
    println!("subtract({}, {}) = {}", a, b, subtract(&[&a, &b]));
    println!("scale({}, 10) = {}", a, scale(&a, 10.0));
    println!("dot_product({}, {}, {}) = {}", a, b, c, dot_product(&[&a, &b, &c])?);
    println!("cross_product({}, {}) = {}", a, b, cross_product(&a, &b)?);

    let d = Vector::new([2.0, 2.0, 2.0, 2.0]);
    println!("magnitude({}) = {}", d, d.magnitude());

    // Mixed dimensions: the shorter vector contributes nothing past its end.
    let short = Vector::new([10.0]);
    println!("sum({}, {}) = {}", a, short, sum(&[&a, &short]));

    match cross_product(&a, &short) {
        Ok(v) => println!("unexpected cross product {}", v),
        Err(e) => println!("cross_product({}, {}) failed: {}", a, short, e),
    }
    match dot_product(&[&a, &short]) {
        Ok(v) => println!("unexpected dot product {}", v),
        Err(e) => println!("dot_product({}, {}) failed: {}", a, short, e),
    }

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
