fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_prost_build::compile_protos("proto/keys/v1/keys.proto")?;
    tonic_prost_build::compile_protos("proto/shorts/v1/shorts.proto")?;
    Ok(())
}
