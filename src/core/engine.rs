use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CleanerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CleanerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting contact cleanup...");

        // Parse
        println!("Parsing contacts...");
        let contacts = self.pipeline.extract().await?;
        println!("Parsed {} contacts", contacts.len());

        // Transform
        println!("Applying transforms...");
        let result = self.pipeline.transform(contacts).await?;
        println!("{} contacts after transforms", result.records.len());

        // Export
        println!("Exporting...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
