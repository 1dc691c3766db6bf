extern crate gen_eval_table;

fn main() {
    // Tell cargo to regenerate the tables whenever the generator changes
    println!("cargo:rerun-if-changed=gen_eval_table/src/lib.rs");
    println!("cargo:rerun-if-changed=build.rs");

    // generate rank pattern tables for the hand evaluator
    if let Err(e) = gen_eval_table::gen_eval_table() {
        panic!("unable to generate eval tables: {}", e);
    }
}
