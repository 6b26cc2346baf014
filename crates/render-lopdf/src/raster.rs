use invoicer_render_core::RenderError;
use lopdf::{dictionary, Object, Stream};
use std::path::Path;

/// A decoded raster ready to be written as an image XObject.
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    /// One 8-bit alpha sample per pixel, present only for sources with an alpha channel.
    pub alpha: Option<Vec<u8>>,
}

impl DecodedImage {
    pub fn open(path: &Path) -> Result<Self, RenderError> {
        let img = image::open(path).map_err(|e| RenderError::image(path, e))?;
        let (width, height) = (img.width(), img.height());
        let alpha = img.color().has_alpha().then(|| {
            img.to_rgba8()
                .pixels()
                .map(|p| p.0[3])
                .collect::<Vec<u8>>()
        });
        Ok(Self {
            width,
            height,
            rgb: img.to_rgb8().into_raw(),
            alpha,
        })
    }

    /// The soft mask stream for the alpha channel, if any.
    pub fn smask_stream(&self) -> Option<Stream> {
        self.alpha.as_ref().map(|alpha| {
            Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => self.width as i64,
                    "Height" => self.height as i64,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8i64,
                },
                alpha.clone(),
            )
        })
    }

    /// The color image stream. `smask` references the mask written by the caller.
    pub fn image_stream(self, smask: Option<lopdf::ObjectId>) -> Stream {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
        };
        if let Some(id) = smask {
            dict.set("SMask", Object::Reference(id));
        }
        Stream::new(dict, self.rgb)
    }
}
