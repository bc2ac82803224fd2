#![allow(non_snake_case)]
use RustedRoots::Examples::root_finding_examples::root_finding_examples;

fn main() {
    let example = 1;
    if let Err(e) = root_finding_examples(example) {
        eprintln!("example {} failed: {}", example, e);
    }
}
