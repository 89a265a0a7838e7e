use image::{DynamicImage, GenericImageView, RgbImage};

/// Read access to a decoded raster image
pub trait PixelBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// The RGB triple at the given pixel, coordinates must be inside the buffer
    fn color_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelBuffer for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelBuffer for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn color_at(&self, x: u32, y: u32) -> [u8; 3] {
        let p = self.get_pixel(x, y);
        [p.0[0], p.0[1], p.0[2]]
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PixelClass {
    #[default]
    Unknown,
    Wall,
    Start,
    End,
    Floor,
}

/// The colors a classifier compares pixels against
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub start: [u8; 3],
    pub end: [u8; 3],
    /// a pixel is a wall if every channel is below this value
    pub wall_threshold: u8,
}

impl Palette {
    pub fn classify_color(&self, color: [u8; 3]) -> PixelClass {
        if color.iter().all(|&c| c < self.wall_threshold) {
            PixelClass::Wall
        } else if color == self.start {
            PixelClass::Start
        } else if color == self.end {
            PixelClass::End
        } else {
            PixelClass::Floor
        }
    }
}

/// Classifies pixels of a buffer and remembers the answer for every coordinate it has seen
pub struct PixelClassifier<'a, B: PixelBuffer> {
    buffer: &'a B,
    palette: Palette,
    width: u32,
    height: u32,
    cache: Vec<PixelClass>,
}

impl<'a, B: PixelBuffer> PixelClassifier<'a, B> {
    pub fn new(buffer: &'a B, palette: Palette) -> Self {
        let width = buffer.width();
        let height = buffer.height();
        Self {
            buffer,
            palette,
            width,
            height,
            cache: vec![PixelClass::Unknown; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels outside of the buffer are reported as walls
    pub fn classify(&mut self, x: u32, y: u32) -> PixelClass {
        if x >= self.width || y >= self.height {
            return PixelClass::Wall;
        }

        let index = y as usize * self.width as usize + x as usize;
        if self.cache[index] == PixelClass::Unknown {
            self.cache[index] = self.palette.classify_color(self.buffer.color_at(x, y));
        }
        self.cache[index]
    }

    pub fn is_start(&mut self, x: u32, y: u32) -> bool {
        self.classify(x, y) == PixelClass::Start
    }

    /// Number of pixels classified so far
    pub fn classified_count(&self) -> usize {
        self.cache
            .iter()
            .filter(|&&c| c != PixelClass::Unknown)
            .count()
    }
}
