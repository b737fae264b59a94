/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, running a chain of operations over images
//!
use std::time::Instant;

use dip_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to carry out decoding
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, batch image processing
///
/// A pipeline owns its images and runs every chained operation, in the order
/// they were added, on each of them. Images come either from
/// [`chain_image`](Pipeline::chain_image) or from a source implementing
/// [`IntoImage`] added via [`chain_decoder`](Pipeline::chain_decoder).
///
/// # Example
/// ```
/// use dip_image::errors::ImageErrors;
/// use dip_image::image::Image;
/// use dip_image::pipelines::Pipeline;
///
/// let mut pipeline = Pipeline::<Image>::new();
/// pipeline.chain_image(Image::fill(3, 4, 4, 3));
/// pipeline.advance_to_end()?;
///
/// assert_eq!(pipeline.images().len(), 1);
/// # Ok::<(), ImageErrors>(())
/// ```
pub struct Pipeline<T: IntoImage> {
    state:      Option<PipelineState>,
    decode:     Option<T>,
    image:      Vec<Image>,
    operations: Vec<Box<dyn OperationsTrait>>
}

impl<T> Pipeline<T>
where
    T: IntoImage
{
    /// Create a new, empty pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<T> {
        Pipeline {
            image:      vec![],
            state:      Some(PipelineState::Initialized),
            decode:     None,
            operations: vec![]
        }
    }

    /// Add an image to this chain.
    pub fn chain_image(&mut self, image: Image) -> &mut Pipeline<T> {
        self.image.push(image);
        self
    }

    /// Override the decoder present in the pipeline with a different
    /// decoder.
    ///
    /// There can only be one decoder in a pipeline, so the last decoder
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<T> {
        self.decode = Some(decoder);
        self
    }

    /// Add a new operation to the pipeline.
    ///
    /// This is used as a way to chain multiple operations in a builder
    /// pattern style
    pub fn chain_operations(&mut self, operations: Box<dyn OperationsTrait>) -> &mut Pipeline<T> {
        self.operations.push(operations);
        self
    }

    pub fn images(&self) -> &[Image] {
        self.image.as_ref()
    }

    /// Return all images in the pipeline as mutable references
    pub fn images_mut(&mut self) -> &mut [Image] {
        self.image.as_mut()
    }

    /// Consume the pipeline, returning the images it holds
    pub fn into_images(self) -> Vec<Image> {
        self.image
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. Finish
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        trace!("Current state: {:?}", state);

        match state {
            PipelineState::Decode => {
                if let Some(decode_op) = self.decode.take() {
                    let start = Instant::now();

                    self.image.push(decode_op.into_image()?);

                    trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                } else if self.image.is_empty() {
                    return Err(ImageErrors::NoImageForOperations);
                } else {
                    trace!("Image already present, no need to decode");
                }
            }
            PipelineState::Operations => {
                for image in self.image.iter_mut() {
                    for operation in &self.operations {
                        let operation_name = operation.name();

                        trace!("Running {}", operation_name);

                        let start = Instant::now();

                        operation.execute(image)?;

                        trace!(
                            "Finished running `{operation_name}` in {} ms",
                            start.elapsed().as_millis()
                        );
                    }
                }
            }
            PipelineState::Finished => {
                trace!("Finished operations for this pipeline");
            }
            PipelineState::Initialized => {}
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance the operations in this pipeline up until
    /// we finish.
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}
