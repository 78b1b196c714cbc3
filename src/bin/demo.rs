//! Demo: a simply supported beam under a central point load

use beam_solver::prelude::*;

fn main() {
    env_logger::init();

    let input = BeamInput {
        length: 10.0,
        e: 200e9,
        i: 1e-4,
        supports: vec![(0.0, Support::Pin), (10.0, Support::Roller)],
        loads: vec![Load::point_force("L0", 5.0, -10000.0, Category::Dead)],
    };

    let output = analyze(&input).expect("analysis failed");

    println!("=== Beam Solver Demo: Simply Supported Beam ===\n");
    println!("Length: {} m, E = {:.2e} Pa, I = {:.2e} m^4\n", input.length, input.e, input.i);

    println!("Nodal displacements:");
    for node in &output.nodes {
        let d = output.result.displacements.get(&node.id).unwrap();
        println!("  {:>4} (x={:>5.2}): y={:>12.6e} m, theta={:>12.6e} rad", node.id, node.x, d.y, d.rotation);
    }

    println!("\nReactions:");
    for node in &output.nodes {
        if let Some(r) = output.result.reactions.get(&node.id) {
            println!("  {:>4} (x={:>5.2}): Fy={:>10.2} N, M={:>10.2} N.m", node.id, node.x, r.fy, r.m);
        }
    }

    let diagram = diagrams(&input, &output, 10, Category::Dead).expect("diagram failed");
    println!("\nShear and moment diagram ({} samples):", diagram.shear.len());
    for ((x, v), (_, m)) in diagram.shear.iter().zip(diagram.moment.iter()) {
        println!("  x={:>5.2}  V={:>10.2} N  M={:>10.2} N.m", x, v, m);
    }
}
