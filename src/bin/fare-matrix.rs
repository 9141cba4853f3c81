use fare_matrix::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pipeline::run()
}
