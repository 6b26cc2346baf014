use invoicer_layout::StandardFont;
use invoicer_render_core::utils::to_win_ansi;
use invoicer_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::io::Write;

/// Collects PDF objects for one document and serializes them on `finish`.
///
/// Object ids for the shared resources, the page tree and the catalog are
/// reserved up front so pages can reference them before they are written.
pub struct PdfWriter<W: Write> {
    writer: W,
    doc: Document,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    font_dict: Dictionary,
    xobject_dict: Dictionary,
    page_ids: Vec<ObjectId>,
    title: String,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: &str, title: &str) -> Self {
        let mut doc = Document::with_version(version);
        let resources_id = doc.new_object_id();
        let pages_id = doc.new_object_id();
        let catalog_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in StandardFont::ALL {
            font_dict.set(
                font_resource_name(font),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }

        Self {
            writer,
            doc,
            catalog_id,
            pages_id,
            resources_id,
            font_dict,
            xobject_dict: Dictionary::new(),
            page_ids: Vec::new(),
            title: title.to_string(),
        }
    }

    pub fn add_object(&mut self, object: impl Into<Object>) -> ObjectId {
        self.doc.add_object(object)
    }

    /// Registers an image XObject under `name` in the shared resources.
    pub fn register_xobject(&mut self, name: &str, id: ObjectId) {
        self.xobject_dict.set(name, id);
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.doc.add_object(stream))
    }

    pub fn write_page(&mut self, content_id: ObjectId, page_width: f32, page_height: f32) -> ObjectId {
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.doc.add_object(page_dict);
        self.page_ids.push(page_id);
        page_id
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finish(mut self) -> Result<W, RenderError> {
        let mut resources = dictionary! { "Font" => self.font_dict };
        if !self.xobject_dict.is_empty() {
            resources.set("XObject", self.xobject_dict);
        }
        self.doc.objects.insert(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.doc.objects.insert(self.catalog_id, catalog_dict.into());

        // No creation date: identical input must produce identical bytes.
        let info_id = self.doc.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(&self.title), StringFormat::Literal),
            "Producer" => Object::string_literal("invoicer"),
        });
        self.doc.trailer.set("Root", self.catalog_id);
        self.doc.trailer.set("Info", info_id);

        self.doc.compress();
        self.doc
            .save_to(&mut self.writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Resource name a font is registered under in every page's resources.
pub(crate) fn font_resource_name(font: StandardFont) -> &'static str {
    match font {
        StandardFont::Helvetica => "F1",
        StandardFont::HelveticaBold => "F2",
    }
}
