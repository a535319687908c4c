mod circle_circle_toi;
mod polygon_sat;
mod ray_polygon;
