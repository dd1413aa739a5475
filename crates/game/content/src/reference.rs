//! Reference table: low 6 bits area index, bit 6 the domain flag,
//! bit 7 the initial special flag (set on route nodes).

pub static REFERENCE_MAP: [u8; 3904] = [
    0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02,
    0x02, 0x02, 0x08, 0x08, 0x08, 0x0a, 0x0a, 0x0a, 0x0d, 0x0d, 0x0d, 0x0d, 0x15, 0x15, 0x15, 0x15,
    0x31, 0x31, 0x31, 0x10, 0x10, 0x10, 0x10, 0x10, 0x18, 0x05, 0x05, 0x05, 0x05, 0x05, 0x05, 0x05,
    0x05, 0x05, 0x05, 0x05, 0x05, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d, 0x2d,
    0x42, 0x02, 0x42, 0x42, 0x02, 0x42, 0x02, 0x42, 0x02, 0x02, 0x42, 0x02, 0x42, 0x02, 0x42, 0x02,
    0x42, 0x48, 0x08, 0x08, 0x08, 0x0a, 0x4a, 0x4a, 0x0d, 0x0d, 0x4d, 0x4d, 0x15, 0x55, 0x55, 0x55,
    0x71, 0x31, 0x31, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x45, 0x05, 0x45, 0x45, 0x05, 0x45, 0x45,
    0x05, 0x05, 0x05, 0x05, 0x45, 0x05, 0x6d, 0x2d, 0x2d, 0x6d, 0x2d, 0x6d, 0x2d, 0x2d, 0x2d, 0x6d,
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42,
    0x48, 0x48, 0x48, 0x48, 0x48, 0x4a, 0x4a, 0x4a, 0xcd, 0x4d, 0x4d, 0x4d, 0x55, 0x55, 0x55, 0x55,
    0x71, 0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d,
    0x02, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x48,
    0x48, 0x48, 0x48, 0x48, 0xc8, 0x4a, 0x4a, 0x4a, 0x4d, 0x4d, 0x4d, 0xcd, 0x55, 0x55, 0x55, 0x55,
    0x71, 0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x45, 0x45, 0x45, 0x45, 0x45, 0x05, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d,
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x41, 0x41, 0x41, 0x48, 0x48,
    0x48, 0x48, 0x48, 0x48, 0x48, 0x4a, 0x4a, 0x4a, 0x4d, 0x4d, 0x0d, 0x4d, 0x15, 0x55, 0x55, 0xd5,
    0x71, 0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x58, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x6f, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d,
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x41, 0x41, 0x41, 0x41, 0x08, 0x48,
    0x48, 0x48, 0x48, 0x48, 0x48, 0x4a, 0x8a, 0x4a, 0x4a, 0x4d, 0x4d, 0x4d, 0x55, 0x4f, 0x4f, 0x71,
    0x71, 0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x58, 0x58, 0x45, 0x45, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x45, 0x6f, 0x6f, 0x6f, 0x6d, 0x6d, 0x6d, 0x6d, 0x2d, 0x6d, 0x6d,
    0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x41, 0x41, 0x41, 0x41, 0x41, 0x48, 0x48,
    0x48, 0x48, 0x08, 0x48, 0x48, 0x48, 0x4a, 0x4e, 0x4e, 0xcd, 0x4d, 0x4d, 0x4f, 0x4f, 0x4f, 0x71,
    0x31, 0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0xd8, 0x58, 0x58, 0x58, 0x45, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x45, 0x45, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d, 0x6d,
    0x41, 0x41, 0x41, 0x01, 0x41, 0x01, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x48,
    0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x4e, 0x0e, 0x4e, 0x4e, 0x4d, 0x4f, 0x4f, 0x8f, 0x4f, 0x4f,
    0x71, 0x71, 0x50, 0x50, 0x50, 0x90, 0x50, 0x50, 0x58, 0x58, 0x58, 0x58, 0x58, 0x45, 0x45, 0x45,
    0x45, 0x45, 0x05, 0x45, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x53, 0x48, 0x48, 0x48, 0x48, 0x46, 0x4e, 0x4e, 0x4e, 0x4e, 0x4d, 0x0f, 0x4f, 0x4f, 0x4f, 0x4f,
    0x71, 0x71, 0x50, 0x50, 0x50, 0x50, 0x50, 0x58, 0x18, 0x58, 0x58, 0x58, 0x58, 0x58, 0x45, 0x45,
    0x45, 0x45, 0x45, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x2f, 0x6e, 0x6e, 0x2e, 0x2e, 0x6e, 0x6e,
    0x41, 0x41, 0x01, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0xd3, 0x53, 0x46, 0x46, 0x46, 0x46, 0x46, 0x4e, 0x4e, 0x4e, 0x4d, 0x4f, 0x4f, 0x4f, 0x4f, 0x4f,
    0x71, 0x71, 0xc9, 0x49, 0x49, 0x50, 0x50, 0x18, 0x58, 0x58, 0x58, 0xd8, 0x58, 0x58, 0x45, 0x45,
    0x45, 0x45, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e,
    0x41, 0x01, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x01, 0x41, 0x41, 0x41, 0x41,
    0x53, 0x53, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46, 0x46, 0xcc, 0x4c, 0x4c, 0x4c, 0x4c, 0xcc,
    0x71, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x58, 0x58, 0x58, 0x58, 0x58, 0x58, 0x58, 0x45, 0x45,
    0x45, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e,
    0x41, 0x41, 0x41, 0x01, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x53,
    0x53, 0x13, 0x46, 0xc6, 0x46, 0x06, 0x46, 0x46, 0x46, 0x06, 0x4c, 0x4c, 0x4c, 0x4c, 0x4c, 0x4c,
    0x4c, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0xc9, 0x58, 0x58, 0x58, 0x58, 0x58, 0x58, 0x45, 0x45,
    0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e, 0x6e,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0xc1, 0x53, 0x53,
    0x53, 0x53, 0x53, 0x46, 0x46, 0x46, 0x46, 0xc6, 0x46, 0x4c, 0x4c, 0x4c, 0x4c, 0x8c, 0x4c, 0x4c,
    0x4c, 0x49, 0x49, 0x49, 0x09, 0x49, 0x49, 0x49, 0x49, 0x49, 0x72, 0x72, 0x72, 0x72, 0x72, 0x6f,
    0x6f, 0x6f, 0x6f, 0x2f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6e, 0x6e, 0x6e, 0x6e, 0x2e, 0x2e,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x41, 0x41, 0x41, 0x53, 0x53, 0x53,
    0x13, 0x53, 0x13, 0x53, 0x46, 0x46, 0x46, 0x46, 0x46, 0x4b, 0x4b, 0x4b, 0x4c, 0x4c, 0x4c, 0x4c,
    0x4c, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x49, 0x72, 0x72, 0xf2, 0x72, 0x72, 0x72, 0x6f,
    0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x2f, 0x6f, 0x6f, 0x6f, 0x6e, 0x2e, 0x6e, 0x6e, 0x6e,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x41, 0x52, 0x52, 0x52, 0x53,
    0x53, 0x53, 0x53, 0x56, 0x46, 0x46, 0x46, 0x46, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4c, 0x4c, 0xcc,
    0x57, 0x17, 0x57, 0x49, 0x49, 0xc9, 0x49, 0x49, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72,
    0x70, 0x70, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x73, 0x73, 0x73, 0x6e, 0x6e, 0x6e, 0x6e,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x52, 0x52, 0x52, 0xd2,
    0x53, 0x53, 0x56, 0x56, 0x56, 0xc6, 0x06, 0x4b, 0x4b, 0xcb, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x57,
    0x57, 0x57, 0x57, 0x57, 0x49, 0x49, 0x49, 0x72, 0x72, 0x32, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72,
    0x70, 0x70, 0x70, 0x6f, 0x6f, 0x6f, 0x6f, 0x6f, 0x73, 0x33, 0x73, 0x73, 0x73, 0x6e, 0x6e, 0x6e,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x52, 0x52, 0x12, 0x52,
    0x52, 0x52, 0x56, 0x56, 0x56, 0x56, 0x56, 0x4b, 0x4b, 0x4b, 0x4b, 0x0b, 0xcb, 0x4b, 0x4b, 0x57,
    0x57, 0x57, 0x17, 0x57, 0x57, 0x57, 0x57, 0x72, 0xf2, 0x72, 0x32, 0x72, 0x72, 0x72, 0x72, 0x72,
    0x70, 0x70, 0x70, 0x70, 0x2f, 0x6f, 0x6f, 0x6f, 0x73, 0x73, 0x73, 0x73, 0x73, 0x6e, 0x6e, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x04, 0x44, 0x44, 0x44, 0x52, 0x52, 0x52,
    0x52, 0x56, 0xd6, 0x16, 0x56, 0x56, 0x56, 0x56, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x57,
    0x57, 0xd7, 0x57, 0x57, 0x57, 0x57, 0x57, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x70,
    0x30, 0x70, 0x70, 0x70, 0x70, 0x6f, 0x6f, 0x6f, 0x73, 0x73, 0x73, 0x73, 0x73, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x04, 0x44, 0x44, 0x52, 0x52, 0x52,
    0x52, 0x56, 0x56, 0x56, 0x56, 0x56, 0x16, 0xd6, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x4b, 0x51,
    0x57, 0x57, 0x57, 0x57, 0x57, 0x57, 0x57, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x72, 0x70, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x34, 0x74, 0x74, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x54,
    0x54, 0x54, 0x56, 0x56, 0xe0, 0x60, 0x60, 0x60, 0x60, 0x4b, 0xcb, 0x4b, 0x4b, 0x4b, 0xd1, 0x51,
    0x51, 0x57, 0x57, 0x57, 0x57, 0xd7, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x70, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x74, 0x74, 0x34, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x14, 0x54,
    0xd4, 0x54, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x4b, 0x4b, 0x4b, 0x51, 0x51, 0x51,
    0x51, 0x51, 0x57, 0x57, 0x57, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x70, 0x70,
    0x70, 0x30, 0x70, 0x70, 0x70, 0x70, 0x74, 0x74, 0x74, 0x34, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x54, 0x54,
    0x54, 0x54, 0xa0, 0x60, 0x60, 0x60, 0x60, 0x20, 0x60, 0x60, 0x4b, 0x4b, 0x51, 0x51, 0x51, 0x51,
    0x51, 0x51, 0x51, 0x51, 0x51, 0x61, 0x61, 0x61, 0x61, 0x61, 0x21, 0x61, 0x61, 0x61, 0x61, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x74, 0x74, 0x74, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x54, 0x54,
    0x54, 0x54, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0xd1, 0x51, 0x51, 0xd1, 0x51, 0x51, 0x11,
    0x51, 0x51, 0xd1, 0x51, 0x51, 0x51, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x21, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x30, 0x74, 0x74, 0x74, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x14, 0x54, 0xd4, 0x54,
    0x54, 0x5d, 0x60, 0x60, 0x60, 0xe0, 0x60, 0x60, 0x60, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51,
    0x51, 0x51, 0x51, 0x51, 0x51, 0x51, 0x61, 0x21, 0x61, 0x61, 0x61, 0x61, 0x61, 0x76, 0x76, 0x70,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x74, 0x74, 0x74, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x54, 0x54,
    0x5d, 0x5d, 0x5d, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51, 0xd1,
    0x51, 0x51, 0x51, 0x51, 0x51, 0x51, 0x61, 0x61, 0x61, 0x61, 0x61, 0x61, 0x76, 0x76, 0x76, 0x76,
    0x70, 0x70, 0x70, 0x70, 0x70, 0x70, 0x74, 0x74, 0x34, 0x74, 0x74, 0x74, 0x47, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x54, 0x5d,
    0x5d, 0xdd, 0x5d, 0x5d, 0x60, 0x60, 0x60, 0x60, 0x60, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51,
    0x11, 0x51, 0xd1, 0x51, 0x51, 0x51, 0x61, 0x61, 0x61, 0x61, 0x61, 0x76, 0x76, 0x76, 0x76, 0x76,
    0x76, 0x70, 0x70, 0x70, 0x70, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x47, 0x47, 0x47,
    0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d,
    0x5d, 0x5d, 0x5d, 0x5d, 0x1d, 0xdd, 0x5d, 0x5d, 0x5d, 0x51, 0x51, 0x51, 0x51, 0xd1, 0x51, 0x51,
    0x51, 0x51, 0x51, 0x51, 0x51, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x36, 0x76, 0x76,
    0x76, 0x76, 0x76, 0x76, 0x76, 0x77, 0x37, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x47, 0x47,
    0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d,
    0x5d, 0x5d, 0x5d, 0x5d, 0xdd, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x51, 0x51, 0x51, 0x51, 0x51, 0x51,
    0x51, 0x51, 0x26, 0x66, 0x66, 0x66, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76, 0x76,
    0x76, 0x76, 0x76, 0x76, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x07,
    0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d,
    0x5d, 0x1d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x51, 0x51, 0x51, 0x51, 0x51,
    0x51, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x76, 0x76, 0x76, 0x36, 0x76, 0x76, 0x76, 0x76, 0x76,
    0x76, 0x76, 0x76, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x5d, 0x5d,
    0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x9d, 0x5d, 0x5d, 0x51, 0x51, 0x51, 0x11, 0x51,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x76, 0x76, 0x76, 0x76,
    0x76, 0x76, 0x77, 0x37, 0x77, 0x77, 0x77, 0x77, 0x77, 0x37, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x5d,
    0x5d, 0x5d, 0x5d, 0x5d, 0x5d, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x66, 0x66, 0x66, 0x26, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x76, 0x76, 0x76,
    0x76, 0x79, 0x79, 0x79, 0x79, 0x79, 0x79, 0x79, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59,
    0x5d, 0x5d, 0x5d, 0x5d, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78,
    0x38, 0x79, 0x79, 0x79, 0x79, 0x79, 0x79, 0x39, 0x79, 0x77, 0x77, 0x7a, 0x7a, 0x7a, 0x7a, 0x3a,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59,
    0x59, 0x5d, 0x5d, 0x5b, 0x5b, 0x1b, 0x5b, 0x1b, 0x5b, 0x5b, 0x5b, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x38, 0x78, 0x78, 0x78, 0x78,
    0x78, 0x78, 0x79, 0x79, 0x79, 0x39, 0x79, 0x79, 0x79, 0x77, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x19, 0x59, 0x59,
    0x59, 0x59, 0x59, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x26, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78,
    0x78, 0x78, 0x79, 0x79, 0x79, 0x79, 0x79, 0x79, 0x79, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59, 0x59,
    0x59, 0x59, 0x5b, 0x5b, 0x1b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x66, 0x66, 0x26, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78,
    0x64, 0x64, 0x64, 0x79, 0x79, 0x79, 0x79, 0x79, 0x7a, 0x7a, 0x7a, 0x3a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x59, 0x59, 0x59, 0x59,
    0x59, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x62, 0x5c, 0x5c, 0x5c,
    0x5c, 0x5c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x78, 0x64,
    0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7b, 0x79, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x1a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x59, 0x59, 0x59,
    0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x1b, 0x5b, 0x1b, 0x5b, 0x5b, 0x5b, 0x5b, 0x62, 0x5c, 0x5c, 0x5c,
    0x1c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x78, 0x78, 0x78, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x3b, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x1a, 0x5a, 0x5a, 0x5a, 0x5a,
    0x5a, 0x5b, 0x1b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x63, 0x63, 0x63, 0x62, 0x5c, 0x5c, 0x5c,
    0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x64, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x5a, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x63, 0x63, 0x63, 0x63, 0x62, 0x5c, 0x5c, 0x5c,
    0x5c, 0x1c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x64, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x3b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7a, 0x7a, 0x7a, 0x7a, 0x7a,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x5b, 0x5b, 0x5b, 0x5b, 0x5b, 0x63, 0x63, 0x63, 0x63, 0x23, 0x62, 0x62, 0x5c, 0x5c,
    0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x64, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x03, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x43, 0x5b, 0x5b, 0x5b, 0x23, 0x63, 0x63, 0x23, 0x63, 0x63, 0x62, 0x62, 0x62, 0x5c,
    0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x64, 0x64, 0x64,
    0x24, 0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x43, 0x5b, 0x1b, 0x1b, 0x63, 0x63, 0x63, 0x63, 0x63, 0x62, 0x62, 0x62, 0x62, 0x62,
    0x5c, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x27, 0x67, 0x67, 0x67, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x3b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x03, 0x43, 0x5b, 0x5b, 0x5b, 0x63, 0x63, 0x63, 0x63, 0x62, 0x62, 0x22, 0x62, 0x62, 0x62,
    0x62, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x67, 0x64, 0x64,
    0x64, 0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x43, 0x65, 0x65, 0x65, 0x63, 0x63, 0x63, 0x63, 0x62, 0x62, 0x62, 0x62, 0x62, 0x62,
    0x62, 0x5c, 0x5c, 0x5c, 0x5c, 0x27, 0x27, 0x67, 0x67, 0x67, 0x67, 0x67, 0x7d, 0x7d, 0x7d, 0x64,
    0x64, 0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x3c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x03, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x43, 0x65, 0x65, 0x65, 0x65, 0x65, 0x63, 0x63, 0x63, 0x62, 0x62, 0x62, 0x5f, 0x5f, 0x5f,
    0x5f, 0x5c, 0x5c, 0x5c, 0x5c, 0x67, 0x67, 0x67, 0x27, 0x67, 0x67, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d,
    0x64, 0x64, 0x64, 0x64, 0x64, 0x7b, 0x7b, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x43, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d, 0x3d, 0x7d, 0x7d, 0x3d,
    0x7d, 0x7d, 0x7d, 0x7d, 0x7e, 0x7e, 0x7e, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43, 0x43,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x1f, 0x5f, 0x1f, 0x5f, 0x5f,
    0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x69, 0x69, 0x69, 0x7d, 0x7d, 0x3d, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d,
    0x7d, 0x7d, 0x7d, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x1e, 0x1e, 0x5e, 0x5e, 0x1e, 0x43, 0x43, 0x43, 0x43, 0x65,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x5f, 0x5f, 0x5f, 0x5f, 0x69, 0x69, 0x69, 0x69, 0x69, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d, 0x7d,
    0x7d, 0x7d, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7c, 0x3c, 0x7c, 0x7c, 0x7c, 0x7c, 0x3c,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x1e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x65, 0x65,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x5f, 0x5f, 0x5f, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x7d, 0x7d, 0x7d, 0x7d, 0x6b, 0x6b,
    0x2b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x65, 0x65,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x25, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x5f, 0x5f, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x7d, 0x7d, 0x2b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x3e, 0x7e, 0x7e, 0x7e, 0x7c, 0x7c, 0x7c, 0x7c, 0x7c,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c, 0x65,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x5f, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6b, 0x6b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x3e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c, 0x6c,
    0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x25, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x29, 0x69, 0x69, 0x29, 0x69, 0x6b, 0x6b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x2b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c, 0x6c,
    0x2c, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6b, 0x6b, 0x6b, 0x2b, 0x6b,
    0x6b, 0x6b, 0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x6c, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x65, 0x5f, 0x5f, 0x5f, 0x5f, 0x5f,
    0x6a, 0x6a, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6b, 0x6b, 0x6b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x2c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x6c, 0x6c, 0x65, 0x65, 0x65, 0x65, 0x68, 0x68, 0x28, 0x68, 0x5f, 0x5f, 0x5f, 0x5f, 0x6a,
    0x6a, 0x6a, 0x6a, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6b, 0x2b, 0x6b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x3e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x3f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x1e, 0x5e, 0x5e, 0x1e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x6c, 0x6c, 0x65, 0x65, 0x65, 0x68, 0x68, 0x28, 0x68, 0x68, 0x68, 0x5f, 0x5f, 0x6a, 0x6a,
    0x6a, 0x6a, 0x6a, 0x6a, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x69, 0x6b, 0x6b, 0x6b, 0x6b, 0x6b,
    0x6b, 0x6b, 0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x2c, 0x6c, 0x68, 0x68, 0x28, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x6a, 0x6a, 0x6a,
    0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x29, 0x69, 0x69, 0x69, 0x69, 0x75, 0x75, 0x75, 0x75, 0x6b, 0x6b,
    0x6b, 0x6b, 0x6b, 0x6b, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x1e, 0x5e, 0x5e, 0x5e, 0x2c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x6c, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x6a, 0x2a, 0x6a,
    0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x69, 0x69, 0x69, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75,
    0x75, 0x75, 0x75, 0x75, 0x75, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e,
    0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c,
    0x6c, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x6a, 0x6a, 0x6a,
    0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x29, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75,
    0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x7e, 0x7e, 0x3e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x7e, 0x3e,
    0x7f, 0x3f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x5e, 0x6c, 0x6c, 0x6c, 0x6c,
    0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x28, 0x68, 0x6a, 0x6a, 0x6a,
    0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x75, 0x75, 0x75, 0x35, 0x75, 0x75, 0x35, 0x75, 0x75,
    0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75,
    0x7f, 0x7f, 0x7f, 0x7f, 0x3f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x5e, 0x5e, 0x6c, 0x6c, 0x2c, 0x68,
    0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x28, 0x68, 0x68, 0x68, 0x68, 0x68, 0x6a, 0x6a, 0x6a,
    0x6a, 0x2a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75,
    0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x75, 0x35, 0x75, 0x75, 0x75, 0x75,
];
