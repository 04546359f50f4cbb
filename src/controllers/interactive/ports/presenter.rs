use crate::controllers::interactive::data::frame_data::FrameData;

pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, frame: FrameData<'_>);
}
